mod error;
mod reply;
mod server;

pub use error::{ChatError, GENERIC_FAILURE};
pub use reply::{
    FOLLOW_UP_IDEAS, MISSING_MESSAGE_REPLY, NEXT_STEPS, PaperContext, compose_reply,
};
pub use server::{ChatReply, answer, chat_router, serve};
