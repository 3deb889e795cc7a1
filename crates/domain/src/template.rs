// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Substitutes `{name}` placeholders in a message template.
///
/// Placeholders with no matching parameter are left untouched so that a
/// misconfigured template still renders something readable.
///
/// # Arguments
///
/// * `template` - The message template, e.g. `"Day {days} of {maxDays}"`
/// * `params` - Placeholder names and their numeric values
#[must_use]
pub fn fill_template(template: &str, params: &[(&str, u32)]) -> String {
    let mut message: String = String::with_capacity(template.len());
    let mut rest: &str = template;

    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let after_open: &str = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            message.push_str(&rest[open..]);
            return message;
        };

        let name: &str = &after_open[..close];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => message.push_str(&value.to_string()),
            None => {
                message.push('{');
                message.push_str(name);
                message.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    message.push_str(rest);
    message
}
