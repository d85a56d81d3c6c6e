//! Obstacle-aware wall layout
//!
//! # Valid regions
//!
//! [`find_valid_regions`] cuts the wall into columns at every exclusion zone
//! edge. Inside a column the free space is a set of vertical gaps between the
//! zones crossing it. Runs of adjacent columns sharing an identical gap merge
//! into one rectangle, so the regions are pairwise disjoint and each is as wide
//! as its gap allows. Regions are tagged by which wall edges they touch.
//!
//! # Placement
//!
//! [`layout_sections`] places requests in input order. Each request tries, in
//! order, a full-height region, then a lower, upper or gap region, then a split
//! across several regions of sufficient height, and is otherwise skipped. The
//! placed rectangle is cut out of its region, leaving up to two residual
//! regions (to its right and above or below it).

use crate::obstacles::{check_collision, ExclusionZone, Obstacle, ObstacleType, SectionBounds};
use cabinetkit_core::error::{ensure_positive, GeometryResult};
use cabinetkit_core::LENGTH_EPSILON;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

type Gaps = SmallVec<[(f64, f64); 4]>;

/// Which wall edges a region touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    /// Floor to ceiling.
    Full,
    /// Starts at the floor, stops below an obstacle.
    Lower,
    /// Starts above an obstacle, runs to the ceiling.
    Upper,
    /// Bounded by obstacles above and below.
    Gap,
}

impl RegionType {
    fn classify(bottom: f64, top: f64, wall_height: f64) -> Self {
        let on_floor = bottom <= LENGTH_EPSILON;
        let at_ceiling = top >= wall_height - LENGTH_EPSILON;
        match (on_floor, at_ceiling) {
            (true, true) => RegionType::Full,
            (true, false) => RegionType::Lower,
            (false, true) => RegionType::Upper,
            (false, false) => RegionType::Gap,
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionType::Full => "full",
            RegionType::Lower => "lower",
            RegionType::Upper => "upper",
            RegionType::Gap => "gap",
        };
        f.write_str(name)
    }
}

/// Free rectangle on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidRegion {
    pub bounds: SectionBounds,
    pub region_type: RegionType,
}

impl ValidRegion {
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn fits(&self, width: f64, height: f64) -> bool {
        self.width() >= width - LENGTH_EPSILON && self.height() >= height - LENGTH_EPSILON
    }

    /// Rectangle of the given size anchored in this region: hung from the top
    /// of upper regions, standing on the bottom of everything else.
    fn anchor(&self, width: f64, height: f64) -> SectionBounds {
        let left = self.bounds.left;
        let right = left + width;
        match self.region_type {
            RegionType::Upper => SectionBounds {
                left,
                bottom: self.bounds.top - height,
                right,
                top: self.bounds.top,
            },
            _ => SectionBounds {
                left,
                bottom: self.bounds.bottom,
                right,
                top: self.bounds.bottom + height,
            },
        }
    }
}

/// Layout tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Regions narrower than this are discarded.
    pub min_region_width: f64,
    /// Regions shorter than this are discarded.
    pub min_region_height: f64,
    /// Whether sections may be split across regions at all.
    pub allow_split: bool,
    /// Narrowest piece a split section may be cut into.
    pub min_split_width: f64,
    /// Per-type clearance overrides; obstacle-level clearances still win.
    pub clearances: BTreeMap<ObstacleType, f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_region_width: 6.0,
            min_region_height: 6.0,
            allow_split: true,
            min_split_width: 12.0,
            clearances: BTreeMap::new(),
        }
    }
}

impl LayoutConfig {
    /// Exclusion zone for an obstacle under this configuration.
    pub fn exclusion_zone(&self, obstacle: &Obstacle) -> ExclusionZone {
        let clearance = obstacle
            .clearance
            .or_else(|| self.clearances.get(&obstacle.obstacle_type).copied())
            .unwrap_or_else(|| obstacle.obstacle_type.default_clearance());
        obstacle.exclusion_zone_with(clearance)
    }
}

/// A section the caller wants on the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRequest {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub shelf_count: u32,
    #[serde(default = "default_true")]
    pub allow_split: bool,
}

fn default_true() -> bool {
    true
}

impl SectionRequest {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> GeometryResult<Self> {
        ensure_positive("section width", width)?;
        ensure_positive("section height", height)?;
        Ok(Self {
            name: name.into(),
            width,
            height,
            shelf_count: 0,
            allow_split: true,
        })
    }

    pub fn with_shelf_count(mut self, shelf_count: u32) -> Self {
        self.shelf_count = shelf_count;
        self
    }

    pub fn without_split(mut self) -> Self {
        self.allow_split = false;
        self
    }
}

/// Piece `index` of `total` when a request was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPart {
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSection {
    pub request_index: usize,
    pub name: String,
    pub bounds: SectionBounds,
    pub region_type: RegionType,
    pub shelf_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSection {
    pub request_index: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub placed: Vec<PlacedSection>,
    pub skipped: Vec<SkippedSection>,
    /// Free space left after placement.
    pub remaining_regions: Vec<ValidRegion>,
    pub zones: Vec<ExclusionZone>,
}

impl LayoutResult {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Total wall length covered by placed sections.
    pub fn placed_width(&self) -> f64 {
        self.placed.iter().map(|p| p.bounds.width()).sum()
    }
}

/// Free rectangles on a wall after removing the exclusion zones.
pub fn find_valid_regions(
    wall_length: f64,
    wall_height: f64,
    zones: &[ExclusionZone],
    min_width: f64,
    min_height: f64,
) -> GeometryResult<Vec<ValidRegion>> {
    ensure_positive("wall length", wall_length)?;
    ensure_positive("wall height", wall_height)?;

    let clipped: Vec<SectionBounds> = zones
        .iter()
        .filter_map(|zone| zone.clipped(wall_length, wall_height))
        .collect();

    let mut cuts: Vec<f64> = Vec::with_capacity(clipped.len() * 2 + 2);
    cuts.push(0.0);
    cuts.push(wall_length);
    for zone in &clipped {
        cuts.push(zone.left);
        cuts.push(zone.right);
    }
    cuts.sort_by(f64::total_cmp);
    cuts.dedup_by(|a, b| (*a - *b).abs() <= LENGTH_EPSILON);

    // (bottom, top) -> left edge of the run currently open for that gap
    let mut open: Vec<((f64, f64), f64)> = Vec::new();
    let mut closed: Vec<SectionBounds> = Vec::new();

    for column in cuts.windows(2) {
        let (left, right) = (column[0], column[1]);
        if right - left <= LENGTH_EPSILON {
            continue;
        }
        let gaps = column_gaps(left, right, wall_height, &clipped);

        let mut still_open = Vec::with_capacity(gaps.len());
        for gap in &gaps {
            let start = open
                .iter()
                .position(|(g, _)| same_gap(*g, *gap))
                .map(|i| open.swap_remove(i).1)
                .unwrap_or(left);
            still_open.push((*gap, start));
        }
        for ((bottom, top), start) in open.drain(..) {
            closed.push(SectionBounds {
                left: start,
                bottom,
                right: left,
                top,
            });
        }
        open = still_open;
    }
    for ((bottom, top), start) in open {
        closed.push(SectionBounds {
            left: start,
            bottom,
            right: wall_length,
            top,
        });
    }

    let mut regions: Vec<ValidRegion> = closed
        .into_iter()
        .filter(|b| b.width() >= min_width - LENGTH_EPSILON && b.height() >= min_height - LENGTH_EPSILON)
        .map(|bounds| ValidRegion {
            bounds,
            region_type: RegionType::classify(bounds.bottom, bounds.top, wall_height),
        })
        .collect();
    sort_regions(&mut regions);
    Ok(regions)
}

fn same_gap(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() <= LENGTH_EPSILON && (a.1 - b.1).abs() <= LENGTH_EPSILON
}

fn sort_regions(regions: &mut [ValidRegion]) {
    regions.sort_by(|a, b| {
        a.bounds
            .left
            .total_cmp(&b.bounds.left)
            .then(a.bounds.bottom.total_cmp(&b.bounds.bottom))
    });
}

/// Free vertical intervals of one column, bottom to top.
fn column_gaps(left: f64, right: f64, wall_height: f64, zones: &[SectionBounds]) -> Gaps {
    let mut blocked: SmallVec<[(f64, f64); 8]> = zones
        .iter()
        .filter(|z| z.left < right - LENGTH_EPSILON && z.right > left + LENGTH_EPSILON)
        .map(|z| (z.bottom, z.top))
        .collect();
    blocked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut gaps = Gaps::new();
    let mut cursor = 0.0;
    for (bottom, top) in blocked {
        if bottom > cursor + LENGTH_EPSILON {
            gaps.push((cursor, bottom));
        }
        cursor = f64::max(cursor, top);
    }
    if wall_height > cursor + LENGTH_EPSILON {
        gaps.push((cursor, wall_height));
    }
    gaps
}

/// Cut `used` out of `region`, returning what is left of it.
///
/// `used` always starts at the region's left edge and spans part of its
/// height touching the top or bottom, so at most two pieces remain: the strip
/// to the right and the strip above or below the used rectangle.
fn split_region(
    region: &ValidRegion,
    used: &SectionBounds,
    wall_height: f64,
) -> SmallVec<[ValidRegion; 2]> {
    let mut residuals = SmallVec::new();
    let mut push = |bounds: SectionBounds| {
        if bounds.width() > LENGTH_EPSILON && bounds.height() > LENGTH_EPSILON {
            residuals.push(ValidRegion {
                bounds,
                region_type: RegionType::classify(bounds.bottom, bounds.top, wall_height),
            });
        }
    };

    push(SectionBounds {
        left: used.right,
        bottom: region.bounds.bottom,
        right: region.bounds.right,
        top: region.bounds.top,
    });
    if used.bottom > region.bounds.bottom + LENGTH_EPSILON {
        push(SectionBounds {
            left: region.bounds.left,
            bottom: region.bounds.bottom,
            right: used.right,
            top: used.bottom,
        });
    }
    if used.top < region.bounds.top - LENGTH_EPSILON {
        push(SectionBounds {
            left: region.bounds.left,
            bottom: used.top,
            right: used.right,
            top: region.bounds.top,
        });
    }
    residuals
}

/// Split a shelf count across pieces in proportion to their widths, keeping
/// the total (largest remainder, ties to the earlier piece).
fn proportional_shelves(total: u32, widths: &[f64]) -> Vec<u32> {
    let sum: f64 = widths.iter().sum();
    if total == 0 || sum <= 0.0 {
        return vec![0; widths.len()];
    }
    let exact: Vec<f64> = widths
        .iter()
        .map(|w| f64::from(total) * w / sum)
        .collect();
    let mut counts: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();
    let assigned: u32 = counts.iter().sum();

    let mut order: Vec<usize> = (0..widths.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = exact[a] - exact[a].floor();
        let fb = exact[b] - exact[b].floor();
        fb.total_cmp(&fa).then(a.cmp(&b))
    });
    for &i in order.iter().take(total.saturating_sub(assigned) as usize) {
        counts[i] += 1;
    }
    counts
}

struct Placement {
    region_index: usize,
    bounds: SectionBounds,
    region_type: RegionType,
}

fn find_single(regions: &[ValidRegion], request: &SectionRequest, kind: RegionType) -> Option<Placement> {
    regions
        .iter()
        .enumerate()
        .find(|(_, r)| r.region_type == kind && r.fits(request.width, request.height))
        .map(|(region_index, r)| Placement {
            region_index,
            bounds: r.anchor(request.width, request.height),
            region_type: r.region_type,
        })
}

fn find_split(
    regions: &[ValidRegion],
    request: &SectionRequest,
    config: &LayoutConfig,
) -> Option<Vec<Placement>> {
    let mut remaining = request.width;
    let mut parts = Vec::new();
    for (region_index, region) in regions.iter().enumerate() {
        if remaining <= LENGTH_EPSILON {
            break;
        }
        if region.height() < request.height - LENGTH_EPSILON
            || region.width() < config.min_split_width - LENGTH_EPSILON
        {
            continue;
        }
        let mut width = region.width().min(remaining);
        // leave at least one minimum-width piece for the regions that follow
        let leftover = remaining - width;
        if leftover > LENGTH_EPSILON && leftover < config.min_split_width - LENGTH_EPSILON {
            let capped = remaining - config.min_split_width;
            if capped >= config.min_split_width - LENGTH_EPSILON {
                width = capped;
            }
        }
        if width < config.min_split_width - LENGTH_EPSILON {
            continue;
        }
        parts.push(Placement {
            region_index,
            bounds: region.anchor(width, request.height),
            region_type: region.region_type,
        });
        remaining -= width;
    }
    (remaining <= LENGTH_EPSILON && parts.len() > 1).then_some(parts)
}

/// Place the requested sections on a wall around its obstacles.
pub fn layout_sections(
    wall_length: f64,
    wall_height: f64,
    obstacles: &[Obstacle],
    requests: &[SectionRequest],
    config: &LayoutConfig,
) -> GeometryResult<LayoutResult> {
    let zones: Vec<ExclusionZone> = obstacles.iter().map(|o| config.exclusion_zone(o)).collect();
    let mut regions = find_valid_regions(
        wall_length,
        wall_height,
        &zones,
        config.min_region_width,
        config.min_region_height,
    )?;
    debug!(
        regions = regions.len(),
        zones = zones.len(),
        requests = requests.len(),
        "laying out wall"
    );

    let mut result = LayoutResult::default();
    for (request_index, request) in requests.iter().enumerate() {
        let single = [RegionType::Full, RegionType::Lower, RegionType::Upper, RegionType::Gap]
            .into_iter()
            .find_map(|kind| find_single(&regions, request, kind));

        let placements = match single {
            Some(placement) => vec![placement],
            None if config.allow_split && request.allow_split => {
                find_split(&regions, request, config).unwrap_or_default()
            }
            None => Vec::new(),
        };

        if placements.is_empty() {
            let reason = format!(
                "no free region fits {:.3} x {:.3}",
                request.width, request.height
            );
            warn!(section = %request.name, %reason, "skipping wall section");
            result.skipped.push(SkippedSection {
                request_index,
                name: request.name.clone(),
                reason,
            });
            continue;
        }

        if let Some(hit) = placements
            .iter()
            .find_map(|p| check_collision(&p.bounds, &zones).into_iter().next())
        {
            let reason = format!("placement would overlap {}", hit.label);
            warn!(section = %request.name, %reason, "skipping wall section");
            result.skipped.push(SkippedSection {
                request_index,
                name: request.name.clone(),
                reason,
            });
            continue;
        }

        let total = placements.len();
        let widths: Vec<f64> = placements.iter().map(|p| p.bounds.width()).collect();
        let shelves = if total > 1 {
            proportional_shelves(request.shelf_count, &widths)
        } else {
            vec![request.shelf_count]
        };

        let mut consumed: Vec<usize> = Vec::with_capacity(total);
        let mut residuals: Vec<ValidRegion> = Vec::new();
        for (index, placement) in placements.iter().enumerate() {
            residuals.extend(split_region(
                &regions[placement.region_index],
                &placement.bounds,
                wall_height,
            ));
            consumed.push(placement.region_index);
            result.placed.push(PlacedSection {
                request_index,
                name: request.name.clone(),
                bounds: placement.bounds,
                region_type: placement.region_type,
                shelf_count: shelves[index],
                split: (total > 1).then_some(SplitPart { index, total }),
            });
        }

        consumed.sort_unstable();
        for index in consumed.into_iter().rev() {
            regions.remove(index);
        }
        regions.extend(residuals.into_iter().filter(|r| {
            r.width() >= config.min_region_width - LENGTH_EPSILON
                && r.height() >= config.min_region_height - LENGTH_EPSILON
        }));
        sort_regions(&mut regions);
    }

    debug!(
        placed = result.placed.len(),
        skipped = result.skipped.len(),
        "wall layout finished"
    );
    result.remaining_regions = regions;
    result.zones = zones;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_wall() -> Vec<Obstacle> {
        vec![Obstacle::new(ObstacleType::Window, 48.0, 36.0, 36.0, 40.0).unwrap()]
    }

    #[test]
    fn test_empty_wall_is_one_full_region() {
        let regions = find_valid_regions(120.0, 96.0, &[], 6.0, 6.0).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].region_type, RegionType::Full);
        assert_eq!(regions[0].width(), 120.0);
    }

    #[test]
    fn test_window_splits_wall() {
        let zones = exclusion_zones_for(&window_wall());
        let regions = find_valid_regions(120.0, 96.0, &zones, 6.0, 6.0).unwrap();
        // full left of window, lower + upper under/over it, full right of it
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0].region_type, RegionType::Full);
        assert_eq!(regions[0].bounds.right, 46.0);
        assert_eq!(regions[1].region_type, RegionType::Lower);
        assert_eq!(regions[1].bounds.top, 34.0);
        assert_eq!(regions[2].region_type, RegionType::Upper);
        assert_eq!(regions[2].bounds.bottom, 78.0);
        assert_eq!(regions[3].region_type, RegionType::Full);
        assert_eq!(regions[3].bounds.left, 86.0);
    }

    #[test]
    fn test_gap_between_obstacles() {
        let obstacles = vec![
            Obstacle::new(ObstacleType::Outlet, 20.0, 10.0, 10.0, 5.0)
                .unwrap()
                .with_clearance(0.0)
                .unwrap(),
            Obstacle::new(ObstacleType::Vent, 20.0, 60.0, 10.0, 10.0)
                .unwrap()
                .with_clearance(0.0)
                .unwrap(),
        ];
        let zones = exclusion_zones_for(&obstacles);
        let regions = find_valid_regions(50.0, 96.0, &zones, 1.0, 1.0).unwrap();
        let gap = regions
            .iter()
            .find(|r| r.region_type == RegionType::Gap)
            .unwrap();
        assert_eq!(gap.bounds.bottom, 15.0);
        assert_eq!(gap.bounds.top, 60.0);
        assert_eq!(gap.bounds.left, 20.0);
        assert_eq!(gap.bounds.right, 30.0);
    }

    #[test]
    fn test_small_regions_filtered() {
        let obstacles =
            vec![Obstacle::new(ObstacleType::Door, 3.0, 0.0, 30.0, 80.0).unwrap()];
        let zones = exclusion_zones_for(&obstacles);
        let regions = find_valid_regions(60.0, 96.0, &zones, 6.0, 6.0).unwrap();
        assert!(regions.iter().all(|r| r.width() >= 6.0 && r.height() >= 6.0));
        // the 1" strip left of the door is gone, the 14" strip over it stays
        assert!(regions.iter().all(|r| r.bounds.left > 0.5));
    }

    #[test]
    fn test_layout_prefers_full_then_lower() {
        let requests = vec![
            SectionRequest::new("pantry", 30.0, 84.0).unwrap(),
            SectionRequest::new("tall", 30.0, 84.0).unwrap(),
            SectionRequest::new("window base", 36.0, 30.0).unwrap(),
        ];
        let result =
            layout_sections(120.0, 96.0, &window_wall(), &requests, &LayoutConfig::default())
                .unwrap();
        assert!(result.is_complete());
        assert_eq!(result.placed[0].region_type, RegionType::Full);
        assert_eq!(result.placed[0].bounds.left, 0.0);
        // the 16" strip beside the pantry is too narrow, so the right side is used
        assert_eq!(result.placed[1].region_type, RegionType::Full);
        assert_eq!(result.placed[1].bounds.left, 86.0);
        assert_eq!(result.placed[2].region_type, RegionType::Lower);
        assert_eq!(result.placed[2].bounds.left, 46.0);
        assert_eq!(result.placed[2].bounds.bottom, 0.0);
    }

    #[test]
    fn test_upper_hangs_from_ceiling() {
        let obstacles =
            vec![Obstacle::new(ObstacleType::Window, 48.0, 20.0, 36.0, 50.0).unwrap()];
        let requests = vec![
            SectionRequest::new("left", 46.0, 96.0).unwrap(),
            SectionRequest::new("right", 34.0, 96.0).unwrap(),
            SectionRequest::new("over window", 30.0, 20.0).unwrap(),
        ];
        let result =
            layout_sections(120.0, 96.0, &obstacles, &requests, &LayoutConfig::default())
                .unwrap();
        assert!(result.is_complete());
        let over = &result.placed[2];
        assert_eq!(over.region_type, RegionType::Upper);
        assert_eq!(over.bounds.top, 96.0);
        assert_eq!(over.bounds.bottom, 76.0);
    }

    #[test]
    fn test_split_scales_shelves() {
        let obstacles = vec![Obstacle::new(ObstacleType::Radiator, 40.0, 0.0, 8.0, 96.0)
            .unwrap()
            .with_clearance(0.0)
            .unwrap()];
        let requests = vec![SectionRequest::new("library", 80.0, 84.0)
            .unwrap()
            .with_shelf_count(10)];
        let result =
            layout_sections(100.0, 96.0, &obstacles, &requests, &LayoutConfig::default()).unwrap();
        assert!(result.is_complete());
        assert_eq!(result.placed.len(), 2);
        assert_eq!(result.placed[0].bounds.width(), 40.0);
        assert_eq!(result.placed[1].bounds.width(), 40.0);
        assert_eq!(result.placed[0].shelf_count + result.placed[1].shelf_count, 10);
        assert_eq!(result.placed[0].split, Some(SplitPart { index: 0, total: 2 }));
    }

    #[test]
    fn test_unplaceable_is_skipped() {
        let requests = vec![SectionRequest::new("too tall", 20.0, 120.0).unwrap()];
        let result =
            layout_sections(120.0, 96.0, &[], &requests, &LayoutConfig::default()).unwrap();
        assert_eq!(result.skipped.len(), 1);
        assert!(result.placed.is_empty());
        assert!(result.skipped[0].reason.contains("no free region"));
    }

    #[test]
    fn test_split_disabled() {
        let obstacles = vec![Obstacle::new(ObstacleType::Radiator, 40.0, 0.0, 8.0, 96.0)
            .unwrap()
            .with_clearance(0.0)
            .unwrap()];
        let requests = vec![SectionRequest::new("library", 80.0, 84.0).unwrap().without_split()];
        let result =
            layout_sections(100.0, 96.0, &obstacles, &requests, &LayoutConfig::default()).unwrap();
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn test_placements_never_collide() {
        let obstacles = vec![
            Obstacle::new(ObstacleType::Window, 30.0, 40.0, 24.0, 30.0).unwrap(),
            Obstacle::new(ObstacleType::Outlet, 70.0, 14.0, 3.0, 4.0).unwrap(),
        ];
        let requests: Vec<SectionRequest> = (0..6)
            .map(|i| SectionRequest::new(format!("s{}", i), 18.0, 30.0).unwrap())
            .collect();
        let config = LayoutConfig::default();
        let result = layout_sections(120.0, 96.0, &obstacles, &requests, &config).unwrap();
        for placed in &result.placed {
            assert!(check_collision(&placed.bounds, &result.zones).is_empty());
        }
        for (i, a) in result.placed.iter().enumerate() {
            for b in &result.placed[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds));
            }
        }
    }

    #[test]
    fn test_clearance_override() {
        let mut config = LayoutConfig::default();
        config.clearances.insert(ObstacleType::Window, 5.0);
        let zone = config.exclusion_zone(&window_wall()[0]);
        assert_eq!(zone.bounds.left, 43.0);
    }

    #[test]
    fn test_proportional_shelves_keeps_total() {
        assert_eq!(proportional_shelves(5, &[30.0, 30.0, 30.0]), vec![2, 2, 1]);
        assert_eq!(proportional_shelves(4, &[60.0, 20.0]), vec![3, 1]);
        assert_eq!(proportional_shelves(0, &[60.0, 20.0]), vec![0, 0]);
    }

    fn exclusion_zones_for(obstacles: &[Obstacle]) -> Vec<ExclusionZone> {
        crate::obstacles::exclusion_zones(obstacles)
    }
}
