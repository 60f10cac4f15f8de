#![allow(dead_code)]

use bunner_markdown_rs::constants::header;
use bunner_markdown_rs::{Headers, MarkdownDecision, RedirectAction, RewriteAction};

pub fn assert_redirect(decision: MarkdownDecision) -> RedirectAction {
    match decision {
        MarkdownDecision::Redirect(action) => action,
        other => panic!("expected redirect decision, got {:?}", other),
    }
}

pub fn assert_rewrite(decision: MarkdownDecision) -> RewriteAction {
    match decision {
        MarkdownDecision::Rewrite(action) => action,
        other => panic!("expected rewrite decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: MarkdownDecision) {
    match decision {
        MarkdownDecision::NotApplicable => {}
        other => panic!("expected pass-through decision, got {:?}", other),
    }
}

pub fn assert_vary_accept(headers: &Headers) {
    assert_eq!(
        headers.get(header::VARY),
        Some(&header::ACCEPT.to_string()),
        "every non-pass-through decision should vary on Accept",
    );
}
