use async_trait::async_trait;

use crate::ids::PostId;
use crate::vote::WidgetView;

/// Outbound port to whatever renders the indicators (a DOM bridge, a TUI,
/// a test recorder).
#[async_trait]
pub trait IndicatorViewPort: Send + Sync {
    /// Replace the rendered classes, labels and score text for one item.
    async fn apply(&self, view: &WidgetView) -> anyhow::Result<()>;

    /// Optional transient-failure hook. The baseline behavior is to surface
    /// nothing, so the default implementation does nothing.
    async fn flash_failure(&self, _post_pk: &PostId) -> anyhow::Result<()> {
        Ok(())
    }
}
