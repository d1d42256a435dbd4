pub mod request;
pub mod response;

pub use request::{
    ChatAppRequest, ChatAppRequestContext, ChatAppRequestOverrides, GPT4VInput, RetrievalMode,
    VectorFields,
};
pub use response::{
    ChatAppResponse, ChatAppResponseOrError, ResponseContext, ResponseMessage, Thought,
};
