use crate::document::{is_supported_format, max_bytes_for, UploadedDocument, MIB, SUPPORTED_FORMATS};

/// Raw form state as extracted from the browser's multipart submission.
/// The upload widget is single-file; `documents` is a list only to catch
/// clients that bypass it.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub documents: Vec<UploadedDocument>,
    pub source_label: String,
    pub target_label: String,
}

/// A submission that passed every pre-flight check and may be sent upstream.
#[derive(Debug)]
pub struct ValidatedSubmission {
    pub document: UploadedDocument,
    pub source_label: String,
    pub target_label: String,
}

/// Pre-flight validation. Checks run independently and every applicable error
/// is collected, so the user sees all problems in one round trip. No I/O.
pub fn validate(
    form: SubmissionForm,
    credential_present: bool,
) -> Result<ValidatedSubmission, Vec<String>> {
    let mut errors = Vec::new();

    if form.documents.is_empty() {
        errors.push("Please upload a document. This field is mandatory.".to_string());
    }
    if form.documents.len() > 1 {
        errors.push(
            "Multiple file uploads are not supported. Please upload only one document at a time."
                .to_string(),
        );
    }
    if form.source_label.is_empty() {
        errors.push("Please select a source language. This field is mandatory.".to_string());
    }
    if form.target_label.is_empty() {
        errors.push("Please select a target language. This field is mandatory.".to_string());
    }
    if !form.source_label.is_empty()
        && !form.target_label.is_empty()
        && form.source_label == form.target_label
    {
        errors.push("Source and target languages must be different.".to_string());
    }
    if !credential_present {
        errors.push("Translation service API key not configured. Please contact admin.".to_string());
    }

    if form.documents.len() == 1 {
        let document = &form.documents[0];
        let extension = document.extension();

        if !is_supported_format(&extension) {
            errors.push(format!(
                "Unsupported file format: '.{}'. Please upload a file with one of these formats: {}",
                extension,
                SUPPORTED_FORMATS.join(", ")
            ));
        }
        if document.byte_size() == 0 {
            errors.push("The uploaded file is empty. Please upload a valid document.".to_string());
        }
        // Size cap is only defined for supported formats.
        if is_supported_format(&extension) && document.byte_size() > max_bytes_for(&extension) {
            errors.push(format!(
                "The uploaded file exceeds the maximum allowed size ({} MB). Please upload a smaller file.",
                max_bytes_for(&extension) / MIB
            ));
        }
    }

    if errors.is_empty() {
        let mut form = form;
        Ok(ValidatedSubmission {
            document: form.documents.remove(0),
            source_label: form.source_label,
            target_label: form.target_label,
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::LANGUAGE_OPTIONS;

    fn doc(name: &str, size: usize) -> UploadedDocument {
        UploadedDocument::new(name, vec![0u8; size])
    }

    fn form(documents: Vec<UploadedDocument>, source: &str, target: &str) -> SubmissionForm {
        SubmissionForm {
            documents,
            source_label: source.to_string(),
            target_label: target.to_string(),
        }
    }

    #[test]
    fn accepts_every_distinct_label_pair_with_a_valid_file() {
        for (source, _) in LANGUAGE_OPTIONS {
            for (target, _) in LANGUAGE_OPTIONS {
                if source == target {
                    continue;
                }
                let result = validate(form(vec![doc("report.pdf", 1024)], source, target), true);
                assert!(result.is_ok(), "rejected {source} -> {target}");
            }
        }
    }

    #[test]
    fn missing_file_is_mandatory() {
        let errors = validate(form(vec![], "English", "French"), true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mandatory"));
    }

    #[test]
    fn multiple_files_are_rejected() {
        let errors = validate(
            form(vec![doc("a.pdf", 10), doc("b.pdf", 10)], "English", "French"),
            true,
        )
        .unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Multiple file uploads")));
    }

    #[test]
    fn missing_source_is_the_only_error_when_everything_else_is_valid() {
        let errors = validate(form(vec![doc("report.pdf", 1024)], "", "French"), true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("source language"));
    }

    #[test]
    fn identical_languages_are_rejected() {
        let errors =
            validate(form(vec![doc("report.pdf", 1024)], "French", "French"), true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be different"));
    }

    #[test]
    fn missing_credential_is_reported() {
        let errors =
            validate(form(vec![doc("report.pdf", 1024)], "English", "French"), false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("API key not configured"));
    }

    #[test]
    fn unsupported_extension_lists_the_supported_formats() {
        let errors =
            validate(form(vec![doc("payload.exe", 1024)], "English", "French"), true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Unsupported file format: '.exe'"));
        for ext in SUPPORTED_FORMATS {
            assert!(errors[0].contains(ext));
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let errors =
            validate(form(vec![doc("report.pdf", 0)], "English", "French"), true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("empty"));
    }

    #[test]
    fn txt_over_one_mib_is_rejected_citing_the_cap() {
        let errors = validate(
            form(vec![doc("notes.txt", 1024 * 1024 + 1)], "English", "French"),
            true,
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("(1 MB)"));
    }

    #[test]
    fn txt_at_exactly_one_mib_passes() {
        let result = validate(
            form(vec![doc("notes.txt", 1024 * 1024)], "English", "French"),
            true,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn pdf_over_fifty_mib_is_rejected_citing_the_cap() {
        let errors = validate(
            form(
                vec![doc("report.pdf", 50 * 1024 * 1024 + 1)],
                "English",
                "French",
            ),
            true,
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("(50 MB)"));
    }

    #[test]
    fn pdf_at_exactly_fifty_mib_passes() {
        let result = validate(
            form(vec![doc("report.pdf", 50 * 1024 * 1024)], "English", "French"),
            true,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn all_applicable_errors_are_collected_together() {
        let errors = validate(form(vec![], "", ""), false).unwrap_err();
        // missing file, missing source, missing target, missing credential
        assert_eq!(errors.len(), 4);
    }
}
