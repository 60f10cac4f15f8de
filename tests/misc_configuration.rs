mod common;

use bunner_markdown_rs::{
    MarkdownNegotiator, NegotiationOptions, ValidationError, merge_vary,
};
use common::asserts::assert_redirect;
use common::builders::{markdown_request, negotiator};

#[test]
fn default_options_are_accepted() {
    assert!(MarkdownNegotiator::new(NegotiationOptions::default()).is_ok());
}

#[test]
fn non_redirect_status_is_rejected() {
    let result = MarkdownNegotiator::new(NegotiationOptions {
        redirect_status: 404,
        ..NegotiationOptions::default()
    });

    let error = match result {
        Ok(_) => panic!("non-3xx redirect status should be rejected"),
        Err(error) => error,
    };
    assert_eq!(error, ValidationError::InvalidRedirectStatus(404));
    assert_eq!(error.to_string(), "redirect status 404 is not a 3xx status code");
}

#[test]
fn blank_index_file_is_rejected() {
    let result = MarkdownNegotiator::new(NegotiationOptions {
        index_file: "  ".into(),
        ..NegotiationOptions::default()
    });

    let error = match result {
        Ok(_) => panic!("blank index file should be rejected"),
        Err(error) => error,
    };
    assert_eq!(error, ValidationError::EmptyIndexFile);
    assert_eq!(error.to_string(), "markdown index file name cannot be empty");
}

#[test]
fn index_file_with_path_separator_is_rejected() {
    let result = MarkdownNegotiator::new(NegotiationOptions {
        index_file: "md/index.md".into(),
        ..NegotiationOptions::default()
    });

    let error = match result {
        Ok(_) => panic!("index file with separator should be rejected"),
        Err(error) => error,
    };
    assert_eq!(
        error.to_string(),
        "markdown index file name 'md/index.md' cannot contain a path separator"
    );
}

#[test]
fn boundary_redirect_statuses_are_accepted() {
    for status in [300, 399] {
        let negotiator = negotiator().redirect_status(status).build();

        let action = assert_redirect(
            markdown_request()
                .url("https://blog.test/posts/edge")
                .accept_markdown()
                .check(&negotiator),
        );
        assert_eq!(action.status, status);
    }
}

#[test]
fn merge_vary_starts_header_when_absent() {
    assert_eq!(merge_vary(None, "Accept"), "Accept");
}

#[test]
fn merge_vary_appends_to_existing_header() {
    assert_eq!(
        merge_vary(Some("Accept-Encoding"), "Accept"),
        "Accept-Encoding, Accept"
    );
}

#[test]
fn merge_vary_deduplicates_case_insensitively() {
    assert_eq!(merge_vary(Some("accept"), "Accept"), "accept");
}

#[test]
fn merge_vary_drops_empty_entries() {
    assert_eq!(
        merge_vary(Some(" , Accept-Encoding,, "), "Accept"),
        "Accept-Encoding, Accept"
    );
}
