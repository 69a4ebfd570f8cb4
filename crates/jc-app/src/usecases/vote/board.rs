use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use jc_core::ports::{IndicatorViewPort, VoteTransportPort};
use jc_core::vote::{PageSnapshot, VoteDirection};
use jc_core::PostId;

use super::widget::VoteWidget;

#[derive(Debug, Error)]
pub enum VoteWidgetError {
    /// No widget is registered for the given item. Hosts may ignore this;
    /// the original page simply had no handler bound for such an id.
    #[error("no votable item with id {0}")]
    UnknownItem(PostId),
}

/// Page-level widget registry.
///
/// 页面级投票组件注册表。One widget per votable item on the rendered page,
/// keyed by the server-assigned post id. Items are independent: toggles on
/// different items never interact.
pub struct VoteBoard {
    widgets: HashMap<PostId, Arc<VoteWidget>>,
}

impl VoteBoard {
    /// Build one widget per item in the page snapshot.
    pub fn from_snapshot(
        page: PageSnapshot,
        transport: Arc<dyn VoteTransportPort>,
        view: Arc<dyn IndicatorViewPort>,
    ) -> Self {
        let widgets = page
            .posts
            .into_iter()
            .map(|snapshot| {
                let id = snapshot.post_pk.clone();
                let widget = Arc::new(VoteWidget::new(snapshot, transport.clone(), view.clone()));
                (id, widget)
            })
            .collect();
        Self { widgets }
    }

    /// Route a user activation to the owning widget.
    pub async fn activate(
        &self,
        post_pk: &PostId,
        direction: VoteDirection,
    ) -> anyhow::Result<()> {
        let widget = self.widget(post_pk).ok_or_else(|| {
            debug!(post_pk = %post_pk, "activation for unknown item");
            VoteWidgetError::UnknownItem(post_pk.clone())
        })?;
        widget.activate(direction).await
    }

    pub fn widget(&self, post_pk: &PostId) -> Option<Arc<VoteWidget>> {
        self.widgets.get(post_pk).cloned()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
