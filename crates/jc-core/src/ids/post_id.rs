use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Server-assigned primary key of a votable post.
///
/// 服务端分配的帖子主键。The server renders it into the page markup
/// (`post_pk`) and the client treats it as an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(String);

impl_id!(PostId);
