// Domain layer modules
pub mod greeting;
pub mod greeting_variant;
pub mod invocation;
pub mod proxy_response;

// Re-exports
pub use greeting::{
    format_timestamp, GreetingBody, ALIAS_MESSAGE, RELEASE_MESSAGE_PREFIX,
    SECOND_RELEASE_MESSAGE_PREFIX, STAGE_MESSAGE, UNKNOWN,
};
pub use greeting_variant::{GreetingVariant, VariantParseError, ALL_VARIANTS};
pub use invocation::{InvocationEvent, InvocationMeta};
pub use proxy_response::{ProxyResponse, CONTENT_TYPE_JSON};
