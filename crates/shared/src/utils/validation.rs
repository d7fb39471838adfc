use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens nested validator output into sorted `path: message` lines.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect("", errors, &mut messages);
    messages.sort();
    messages
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match error.code.as_ref() {
                            "email" => "Invalid email format".to_string(),
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            _ => format!("Invalid {field}"),
                        });
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Line {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1))]
        quantity: i64,
    }

    #[derive(Validate)]
    struct Basket {
        #[validate(email)]
        email: String,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn flattens_nested_list_errors() {
        let basket = Basket {
            email: "nope".into(),
            lines: vec![
                Line {
                    name: "ok".into(),
                    quantity: 1,
                },
                Line {
                    name: String::new(),
                    quantity: 0,
                },
            ],
        };

        let messages = validation_messages(&basket.validate().unwrap_err());
        assert_eq!(
            messages,
            vec![
                "email: Invalid email format".to_string(),
                "lines[1].name: must not be empty".to_string(),
                "lines[1].quantity: Value out of range".to_string(),
            ]
        );
    }
}
