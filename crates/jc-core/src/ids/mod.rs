//! ID type wrappers for type safety.

mod id_macro;
pub mod post_id;

pub use post_id::PostId;
