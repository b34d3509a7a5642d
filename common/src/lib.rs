pub mod logger;

use validator::ValidationErrors;

/// Flattens `validator` errors into a single `; `-separated message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Title cannot be empty"))]
        title: String,
        #[validate(range(min = 1, message = "Max score must be at least 1"))]
        max_score: i64,
    }

    #[test]
    fn joins_all_messages() {
        let sample = Sample {
            title: String::new(),
            max_score: 0,
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "Max score must be at least 1; Title cannot be empty"
        );
    }

    #[test]
    fn valid_input_has_no_errors() {
        let sample = Sample {
            title: "Essay".into(),
            max_score: 10,
        };
        assert!(sample.validate().is_ok());
    }
}
