//! Recomputation driver for a single cloud container.
//!
//! Holds the inputs of the last pass and turns explicit change events
//! (new keywords, new config, container resize) into full layout
//! recomputations. The host owns event delivery and debouncing.

use tracing::debug;

use crate::error::LayoutError;
use crate::layout::layout;
use crate::types::{CloudLayout, ContainerSize, KeywordItem, LayoutConfig};

#[derive(Debug, Clone)]
pub struct LayoutSession {
    keywords: Vec<KeywordItem>,
    container: ContainerSize,
    config: LayoutConfig,
    current: CloudLayout,
}

impl LayoutSession {
    pub fn new(
        keywords: Vec<KeywordItem>,
        container: ContainerSize,
        config: LayoutConfig,
    ) -> Result<Self, LayoutError> {
        let current = layout(&keywords, container, &config)?;
        Ok(Self {
            keywords,
            container,
            config,
            current,
        })
    }

    pub fn current(&self) -> &CloudLayout {
        &self.current
    }

    pub fn keywords(&self) -> &[KeywordItem] {
        &self.keywords
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the keyword set. On error the session is unchanged.
    pub fn set_keywords(
        &mut self,
        keywords: Vec<KeywordItem>,
    ) -> Result<&CloudLayout, LayoutError> {
        self.current = layout(&keywords, self.container, &self.config)?;
        self.keywords = keywords;
        Ok(&self.current)
    }

    pub fn set_config(
        &mut self,
        config: LayoutConfig,
    ) -> Result<&CloudLayout, LayoutError> {
        self.current = layout(&self.keywords, self.container, &config)?;
        self.config = config;
        Ok(&self.current)
    }

    /// Container size changed. Returns `None` when the size is the
    /// same as the last pass and nothing was recomputed.
    pub fn resize(
        &mut self,
        container: ContainerSize,
    ) -> Result<Option<&CloudLayout>, LayoutError> {
        if container == self.container {
            debug!(
                width = container.width,
                height = container.height,
                "resize to current size ignored"
            );
            return Ok(None);
        }
        self.current = layout(&self.keywords, container, &self.config)?;
        self.container = container;
        Ok(Some(&self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<KeywordItem> {
        vec![
            KeywordItem::new("excellent", 64.0),
            KeywordItem::new("quality", 48.0),
            KeywordItem::new("great", 42.0),
            KeywordItem::new("frustrating", 15.0),
        ]
    }

    fn session() -> LayoutSession {
        LayoutSession::new(
            keywords(),
            ContainerSize::new(600.0, 400.0),
            LayoutConfig::seeded(4),
        )
        .expect("session")
    }

    #[test]
    fn initial_layout_computed() {
        let s = session();
        assert_eq!(s.current().words.len(), 4);
        assert_eq!(s.keywords().len(), 4);
    }

    #[test]
    fn same_size_resize_is_noop() {
        let mut s = session();
        let same = s.resize(ContainerSize::new(600.0, 400.0));
        assert!(same.expect("resize").is_none());
    }

    #[test]
    fn resize_recomputes() {
        let mut s = session();
        let tall = ContainerSize::new(300.0, 800.0);
        let fresh = layout(&keywords(), tall, &LayoutConfig::seeded(4))
            .expect("layout");
        let out = s.resize(tall).expect("resize");
        assert_eq!(out, Some(&fresh));
        assert_eq!(s.container(), ContainerSize::new(300.0, 800.0));
    }

    #[test]
    fn set_keywords_replaces_layout() {
        let mut s = session();
        let out = s
            .set_keywords(vec![KeywordItem::new("solo", 3.0)])
            .expect("set");
        assert_eq!(out.words.len(), 1);
        assert_eq!(out.words[0].text, "solo");
    }

    #[test]
    fn failed_update_keeps_state() {
        let mut s = session();
        let before = s.current().clone();
        let bad = vec![KeywordItem::new("bad", -1.0)];
        assert!(s.set_keywords(bad).is_err());
        assert!(s.resize(ContainerSize::new(0.0, 10.0)).is_err());
        let bad_config = LayoutConfig {
            color_palette: vec![],
            ..LayoutConfig::default()
        };
        assert!(s.set_config(bad_config).is_err());
        assert_eq!(s.current(), &before);
        assert_eq!(s.keywords().len(), 4);
        assert_eq!(s.container(), ContainerSize::new(600.0, 400.0));
        assert_eq!(s.config().random_seed, Some(4));
    }

    #[test]
    fn set_config_applies() {
        let mut s = session();
        let config = LayoutConfig {
            min_font_size: 20.0,
            max_font_size: 20.0,
            ..LayoutConfig::seeded(4)
        };
        let out = s.set_config(config).expect("config");
        assert!(out.words.iter().all(|w| w.font_size == 20.0));
    }
}
