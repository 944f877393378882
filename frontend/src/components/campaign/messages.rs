use std::time::Duration;

use common::catalog::FilterCategory;
use common::model::filter::{FilterValue, TagKind};

#[derive(Clone)]
pub enum Msg {
    SetCampaignName(String),
    SelectCategory(FilterCategory),
    ToggleValue(FilterCategory, FilterValue),
    ClearCategory(FilterCategory),
    SetTagInput(String),
    SetTagKind(TagKind),
    AddTag,
    Preview,
    Back,
    Submit,
    /// Virtual time elapsed since the previous playback tick.
    PlaybackTick(Duration),
    NewCampaign,
}
