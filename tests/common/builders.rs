#![allow(dead_code)]

use bunner_markdown_rs::{
    DeliveryStrategy, MarkdownDecision, MarkdownNegotiator, NegotiationOptions, RequestContext,
};

#[derive(Default)]
pub struct NegotiatorBuilder {
    strategy: Option<DeliveryStrategy>,
    redirect_status: Option<u16>,
    index_file: Option<String>,
}

impl NegotiatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: DeliveryStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn redirect_status(mut self, status: u16) -> Self {
        self.redirect_status = Some(status);
        self
    }

    pub fn index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = Some(name.into());
        self
    }

    pub fn build(self) -> MarkdownNegotiator {
        let NegotiationOptions {
            strategy: default_strategy,
            redirect_status: default_redirect_status,
            index_file: default_index_file,
        } = NegotiationOptions::default();

        MarkdownNegotiator::new(NegotiationOptions {
            strategy: self.strategy.unwrap_or(default_strategy),
            redirect_status: self.redirect_status.unwrap_or(default_redirect_status),
            index_file: self.index_file.unwrap_or(default_index_file),
        })
        .expect("valid negotiation configuration")
    }
}

pub struct MarkdownRequestBuilder {
    url: String,
    accept: Option<String>,
}

impl MarkdownRequestBuilder {
    pub fn new() -> Self {
        Self {
            url: "https://blog.test/".into(),
            accept: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn accept_markdown(self) -> Self {
        self.accept("text/markdown")
    }

    pub fn check(self, negotiator: &MarkdownNegotiator) -> MarkdownDecision {
        let MarkdownRequestBuilder { url, accept } = self;
        let ctx = RequestContext {
            url: &url,
            accept: accept.as_deref(),
        };
        negotiator
            .check(&ctx)
            .expect("request evaluation should succeed")
    }
}

pub fn negotiator() -> NegotiatorBuilder {
    NegotiatorBuilder::new()
}

pub fn markdown_request() -> MarkdownRequestBuilder {
    MarkdownRequestBuilder::new()
}
