//! Panel types and the [`Panel`] value object
//!
//! A panel is a flat rectangular part produced by a component. Its `width`
//! always runs along the panel's longest visible edge across the cabinet;
//! the meaning of `height` depends on the panel type: for horizontal panels
//! (tops, shelves, trays, work surfaces) it is the front-to-back depth, for
//! every other panel it is the vertical extent.

use super::cuts::CutMetadata;
use crate::error::{ensure_positive, GeometryResult};
use crate::materials::MaterialSpec;
use crate::results::MetadataValue;
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Broad grouping of panel types, used for cut-list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelCategory {
    Structural,
    DoorDrawer,
    Decorative,
    Corner,
    Desk,
    Surface,
    Bay,
}

/// Every kind of panel the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelType {
    // Structural carcass
    Top,
    Bottom,
    LeftSide,
    RightSide,
    Back,
    Shelf,
    Divider,
    HorizontalDivider,
    Nailer,
    ToeKick,
    // Doors and drawers
    Door,
    DrawerFront,
    DrawerSide,
    DrawerBoxFront,
    DrawerBoxBack,
    DrawerBottom,
    // Decorative trim
    FaceFrameStile,
    FaceFrameRail,
    ArchHeader,
    Valance,
    LightRail,
    CrownMolding,
    CrownReturn,
    // Corner cabinets
    Filler,
    DiagonalFace,
    LazySusanTray,
    // Desks
    Desktop,
    ModestyPanel,
    KeyboardTray,
    KeyboardEnclosure,
    MonitorShelf,
    MonitorRiser,
    WireChase,
    // Work surfaces and seating
    Countertop,
    Backsplash,
    SeatSurface,
    SeatFront,
    // Bay windows
    BayCeilingFacet,
    BaySeatWing,
    BayApron,
}

impl PanelType {
    /// Every panel type in declaration order.
    pub const ALL: [PanelType; 40] = [
        PanelType::Top,
        PanelType::Bottom,
        PanelType::LeftSide,
        PanelType::RightSide,
        PanelType::Back,
        PanelType::Shelf,
        PanelType::Divider,
        PanelType::HorizontalDivider,
        PanelType::Nailer,
        PanelType::ToeKick,
        PanelType::Door,
        PanelType::DrawerFront,
        PanelType::DrawerSide,
        PanelType::DrawerBoxFront,
        PanelType::DrawerBoxBack,
        PanelType::DrawerBottom,
        PanelType::FaceFrameStile,
        PanelType::FaceFrameRail,
        PanelType::ArchHeader,
        PanelType::Valance,
        PanelType::LightRail,
        PanelType::CrownMolding,
        PanelType::CrownReturn,
        PanelType::Filler,
        PanelType::DiagonalFace,
        PanelType::LazySusanTray,
        PanelType::Desktop,
        PanelType::ModestyPanel,
        PanelType::KeyboardTray,
        PanelType::KeyboardEnclosure,
        PanelType::MonitorShelf,
        PanelType::MonitorRiser,
        PanelType::WireChase,
        PanelType::Countertop,
        PanelType::Backsplash,
        PanelType::SeatSurface,
        PanelType::SeatFront,
        PanelType::BayCeilingFacet,
        PanelType::BaySeatWing,
        PanelType::BayApron,
    ];

    /// Whether `height` means front-to-back depth rather than vertical extent.
    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            PanelType::Top
                | PanelType::Bottom
                | PanelType::Shelf
                | PanelType::HorizontalDivider
                | PanelType::DrawerBottom
                | PanelType::LazySusanTray
                | PanelType::Desktop
                | PanelType::KeyboardTray
                | PanelType::MonitorShelf
                | PanelType::Countertop
                | PanelType::SeatSurface
                | PanelType::BayCeilingFacet
                | PanelType::BaySeatWing
        )
    }

    pub fn category(&self) -> PanelCategory {
        use PanelType::*;
        match self {
            Top | Bottom | LeftSide | RightSide | Back | Shelf | Divider | HorizontalDivider
            | Nailer | ToeKick => PanelCategory::Structural,
            Door | DrawerFront | DrawerSide | DrawerBoxFront | DrawerBoxBack | DrawerBottom => {
                PanelCategory::DoorDrawer
            }
            FaceFrameStile | FaceFrameRail | ArchHeader | Valance | LightRail | CrownMolding
            | CrownReturn => PanelCategory::Decorative,
            Filler | DiagonalFace | LazySusanTray => PanelCategory::Corner,
            Desktop | ModestyPanel | KeyboardTray | KeyboardEnclosure | MonitorShelf
            | MonitorRiser | WireChase => PanelCategory::Desk,
            Countertop | Backsplash | SeatSurface | SeatFront => PanelCategory::Surface,
            BayCeilingFacet | BaySeatWing | BayApron => PanelCategory::Bay,
        }
    }

    /// Configuration / serialization name (`"left_side"`).
    pub fn as_str(&self) -> &'static str {
        use PanelType::*;
        match self {
            Top => "top",
            Bottom => "bottom",
            LeftSide => "left_side",
            RightSide => "right_side",
            Back => "back",
            Shelf => "shelf",
            Divider => "divider",
            HorizontalDivider => "horizontal_divider",
            Nailer => "nailer",
            ToeKick => "toe_kick",
            Door => "door",
            DrawerFront => "drawer_front",
            DrawerSide => "drawer_side",
            DrawerBoxFront => "drawer_box_front",
            DrawerBoxBack => "drawer_box_back",
            DrawerBottom => "drawer_bottom",
            FaceFrameStile => "face_frame_stile",
            FaceFrameRail => "face_frame_rail",
            ArchHeader => "arch_header",
            Valance => "valance",
            LightRail => "light_rail",
            CrownMolding => "crown_molding",
            CrownReturn => "crown_return",
            Filler => "filler",
            DiagonalFace => "diagonal_face",
            LazySusanTray => "lazy_susan_tray",
            Desktop => "desktop",
            ModestyPanel => "modesty_panel",
            KeyboardTray => "keyboard_tray",
            KeyboardEnclosure => "keyboard_enclosure",
            MonitorShelf => "monitor_shelf",
            MonitorRiser => "monitor_riser",
            WireChase => "wire_chase",
            Countertop => "countertop",
            Backsplash => "backsplash",
            SeatSurface => "seat_surface",
            SeatFront => "seat_front",
            BayCeilingFacet => "bay_ceiling_facet",
            BaySeatWing => "bay_seat_wing",
            BayApron => "bay_apron",
        }
    }

    /// Parse a configuration name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str().replace('_', " ");
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Edge of a panel, seen from the front of the cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

/// A flat rectangular part produced by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub panel_type: PanelType,
    pub width: f64,
    /// Vertical extent, or depth for horizontal panel types.
    pub height: f64,
    pub material: MaterialSpec,
    pub position: Position,
    /// Optional human label (e.g. "Drawer 2 front").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_metadata: Option<CutMetadata>,
}

impl Panel {
    /// Create a panel, rejecting non-positive dimensions.
    pub fn new(
        panel_type: PanelType,
        width: f64,
        height: f64,
        material: MaterialSpec,
        position: Position,
    ) -> GeometryResult<Self> {
        ensure_positive("panel width", width)?;
        ensure_positive("panel height", height)?;
        Ok(Self {
            panel_type,
            width,
            height,
            material,
            position,
            label: None,
            metadata: BTreeMap::new(),
            cut_metadata: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_cut_metadata(mut self, cut_metadata: CutMetadata) -> Self {
        if !cut_metadata.is_empty() {
            self.cut_metadata = Some(cut_metadata);
        }
        self
    }

    /// Face area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn thickness(&self) -> f64 {
        self.material.thickness
    }
}
