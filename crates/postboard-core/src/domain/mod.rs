//! Domain entities - the core business objects.

mod post;
mod seed;
mod user;

pub use post::{NewPost, Post, validate_content};
pub use seed::{SEED_POST_COUNT, seed_posts};
pub use user::{User, validate_user_name};
