//! Style resolution.
//!
//! A region's [`RenderStyle`] is a pure function of its layer, its category, and three flags:
//! whether it has an active condition, whether it is hovered and whether it is selected.
//! Selection beats hover, and hover beats activation, when picking opacity.

use bodymap_types::Layer;
use serde::Serialize;

use crate::catalog::{Category, Region};
use crate::constants::{
    FILL_BODY_GRADIENT, FILL_INTERNAL_NEUTRAL, FILL_NONE, OPACITY_ACTIVE, OPACITY_BASE_IDLE,
    OPACITY_HOVERED, OPACITY_INTERNAL_IDLE, OPACITY_OVERLAY_IDLE, OPACITY_SELECTED, STROKE_ACTIVE,
    STROKE_IDLE, STROKE_SELECTED, STROKE_WIDTH_IDLE, STROKE_WIDTH_OVERLAY, STROKE_WIDTH_SELECTED,
};

/// Highlight colours for active regions.
pub struct Palette;

impl Palette {
    pub const RED: &'static str = "#EF4444";
    pub const BLUE: &'static str = "#3B82F6";
    pub const AMBER: &'static str = "#F59E0B";
    pub const PURPLE: &'static str = "#A855F7";
    pub const PINK: &'static str = "#EC4899";

    /// Used for every category without a colour of its own.
    pub const DEFAULT_WARNING: &'static str = Self::AMBER;

    pub fn highlight(category: Category) -> &'static str {
        match category {
            Category::Cardio | Category::Vascular => Self::RED,
            Category::Thoracic => Self::BLUE,
            Category::Digestive => Self::AMBER,
            Category::Neuro => Self::PURPLE,
            Category::Reproductive => Self::PINK,
            Category::Throat
            | Category::Respiratory
            | Category::Hepatic
            | Category::Musculoskeletal => Self::DEFAULT_WARNING,
        }
    }
}

/// Interaction and activation flags for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionFlags {
    pub active: bool,
    pub hovered: bool,
    pub selected: bool,
}

/// Concrete paint for one region. Recomputed on every state change.
///
/// For stroke-drawn overlays `fill` is `none` and `fill_opacity` is the element opacity the
/// host applies to the stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStyle {
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub glow: bool,
}

pub fn resolve_style(region: &Region, flags: RegionFlags) -> RenderStyle {
    let fill = match (region.layer, flags.active) {
        (Layer::Overlay, _) => FILL_NONE,
        (_, true) => Palette::highlight(region.category),
        (Layer::Base, false) => FILL_BODY_GRADIENT,
        (Layer::Internal, false) => FILL_INTERNAL_NEUTRAL,
    };

    let idle_opacity = match region.layer {
        Layer::Base => OPACITY_BASE_IDLE,
        Layer::Internal => OPACITY_INTERNAL_IDLE,
        Layer::Overlay => OPACITY_OVERLAY_IDLE,
    };
    let fill_opacity = if flags.selected {
        OPACITY_SELECTED
    } else if flags.hovered {
        OPACITY_HOVERED
    } else if flags.active {
        OPACITY_ACTIVE
    } else {
        idle_opacity
    };

    let stroke = if flags.selected {
        STROKE_SELECTED
    } else if flags.active {
        STROKE_ACTIVE
    } else {
        STROKE_IDLE
    };

    let stroke_width = if flags.selected {
        STROKE_WIDTH_SELECTED
    } else if region.layer == Layer::Overlay {
        STROKE_WIDTH_OVERLAY
    } else {
        STROKE_WIDTH_IDLE
    };

    RenderStyle {
        fill,
        fill_opacity,
        stroke,
        stroke_width,
        glow: flags.active || flags.hovered,
    }
}
