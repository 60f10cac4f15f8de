/// How the Markdown alternative reaches the client.
///
/// The two deployment styles observed in edge middlewares differ only in this
/// choice, so it is a single option rather than two engines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryStrategy {
    /// Answer with a redirect status and a `Location` header; the client
    /// re-requests the Markdown resource and its address bar reflects it.
    #[default]
    Redirect,
    /// Ask the host to fetch the Markdown resource on the server's behalf and
    /// substitute that response, leaving the client-visible URL unchanged.
    Rewrite,
}
