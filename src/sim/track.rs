//! Building generation and recycling
//!
//! The track is a short queue of platform segments covering the viewport and
//! a little beyond it. Segments scroll left each tick; each one spawns
//! exactly one successor as its span clears the right edge, and is evicted
//! once its span has fully left the screen.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::runner::Runner;
use crate::consts::*;

/// Lifecycle of a segment relative to the runner's horizontal position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingPhase {
    /// Left edge has not yet reached the runner
    Upcoming,
    /// Directly beneath the runner; its height is the landing reference
    Underfoot,
    /// The runner has passed the far edge
    Passed,
}

/// One rectangular platform segment plus the gap that follows it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    /// World-space left edge; the only field that moves after creation
    pub left: f32,
    pub width: f32,
    /// Walkable height of the rooftop
    pub height: f32,
    /// Empty span between this segment and its successor
    pub gap: f32,
    pub phase: BuildingPhase,
    /// One-shot flag: a successor has been spawned for this segment
    pub spawned_next: bool,
}

impl Building {
    /// New segment with geometry drawn from the session RNG
    pub fn generate(id: u32, left: f32, rng: &mut Pcg32) -> Self {
        Self {
            id,
            left,
            width: BUILDING_WIDTH_MIN + rng.random::<f32>() * BUILDING_WIDTH_RANGE,
            height: BUILDING_HEIGHT_MIN + rng.random::<f32>() * BUILDING_HEIGHT_RANGE,
            gap: BUILDING_GAP_MIN + rng.random::<f32>() * BUILDING_GAP_RANGE,
            phase: BuildingPhase::Upcoming,
            spawned_next: false,
        }
    }

    /// World-space right edge of the walkable surface
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Width plus the trailing gap
    #[inline]
    pub fn total_span(&self) -> f32 {
        self.width + self.gap
    }
}

/// The active window of segments, oldest (leftmost) at the front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub(crate) buildings: VecDeque<Building>,
    pub(crate) viewport_width: f32,
    pub(crate) next_id: u32,
}

impl Track {
    /// New track with a single segment placed just off the right edge
    pub fn new(viewport_width: f32, rng: &mut Pcg32) -> Self {
        let mut track = Self {
            buildings: VecDeque::new(),
            viewport_width,
            next_id: 0,
        };
        track.spawn(rng);
        track
    }

    /// Live segments, oldest first
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Look up a segment by id
    pub fn get(&self, id: u32) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Walkable height of the segment with the given id
    pub fn height_of(&self, id: u32) -> Option<f32> {
        self.get(id).map(|b| b.height)
    }

    fn spawn(&mut self, rng: &mut Pcg32) {
        let id = self.next_id;
        self.next_id += 1;
        let building = Building::generate(id, self.viewport_width, rng);
        log::debug!(
            "spawned building {id}: width={:.0} height={:.0} gap={:.0}",
            building.width,
            building.height,
            building.gap
        );
        self.buildings.push_back(building);
    }

    /// Advance the track by one tick's distance
    ///
    /// Four passes over the queue: scroll, underfoot scan, one-shot spawn,
    /// left-edge eviction. The underfoot scan runs oldest-first so that a
    /// newer segment scanned later in the same pass can take over the
    /// current slot after an older one exits.
    pub fn advance(
        &mut self,
        distance: f32,
        runner_x: f32,
        runner: &mut Runner,
        rng: &mut Pcg32,
    ) {
        for building in &mut self.buildings {
            building.left -= distance;
        }

        for building in &mut self.buildings {
            match building.phase {
                BuildingPhase::Upcoming => {
                    if building.left <= runner_x {
                        building.phase = BuildingPhase::Underfoot;
                        runner.current_building = Some(building.id);
                        runner.was_supported = true;
                    }
                }
                BuildingPhase::Underfoot => {
                    if building.right() < runner_x {
                        // Walked off the far edge: unsupported until a later
                        // segment claims the slot or the runner lands
                        building.phase = BuildingPhase::Passed;
                        runner.current_building = None;
                        runner.airborne = true;
                    }
                }
                BuildingPhase::Passed => {}
            }
        }

        let mut successors = 0;
        for building in &mut self.buildings {
            if !building.spawned_next
                && building.left + building.total_span() <= self.viewport_width
            {
                building.spawned_next = true;
                successors += 1;
            }
        }
        for _ in 0..successors {
            self.spawn(rng);
        }

        while self
            .buildings
            .front()
            .is_some_and(|b| b.left + b.total_span() <= 0.0)
        {
            if let Some(building) = self.buildings.pop_front() {
                log::debug!("evicted building {}", building.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    fn raw(id: u32, left: f32, width: f32, height: f32, gap: f32) -> Building {
        Building {
            id,
            left,
            width,
            height,
            gap,
            phase: BuildingPhase::Upcoming,
            spawned_next: false,
        }
    }

    fn track_with(buildings: Vec<Building>) -> Track {
        let next_id = buildings.iter().map(|b| b.id + 1).max().unwrap_or(0);
        Track {
            buildings: buildings.into(),
            viewport_width: 480.0,
            next_id,
        }
    }

    #[test]
    fn test_generated_geometry_within_ranges() {
        let mut rng = test_rng();
        for id in 0..100 {
            let b = Building::generate(id, 480.0, &mut rng);
            assert!(b.width >= BUILDING_WIDTH_MIN);
            assert!(b.width < BUILDING_WIDTH_MIN + BUILDING_WIDTH_RANGE);
            assert!(b.height >= BUILDING_HEIGHT_MIN);
            assert!(b.height < BUILDING_HEIGHT_MIN + BUILDING_HEIGHT_RANGE);
            assert!(b.gap >= BUILDING_GAP_MIN);
            assert!(b.gap < BUILDING_GAP_MIN + BUILDING_GAP_RANGE);
            assert_eq!(b.total_span(), b.width + b.gap);
        }
    }

    #[test]
    fn test_new_track_starts_off_right_edge() {
        let mut rng = test_rng();
        let track = Track::new(480.0, &mut rng);
        assert_eq!(track.len(), 1);
        let first = track.buildings().next().unwrap();
        assert_eq!(first.left, 480.0);
        assert_eq!(first.phase, BuildingPhase::Upcoming);
    }

    #[test]
    fn test_successor_spawned_exactly_once() {
        // width=300 gap=100 at left=800 in a 480-wide viewport: no spawn
        // until the span's end crosses the right edge (left <= 80)
        let mut rng = test_rng();
        let mut track = track_with(vec![raw(0, 800.0, 300.0, 50.0, 100.0)]);
        let mut runner = Runner::default();

        track.advance(719.0, 0.0, &mut runner, &mut rng);
        assert_eq!(track.len(), 1, "left=81 must not spawn yet");

        track.advance(1.0, 0.0, &mut runner, &mut rng);
        assert_eq!(track.len(), 2, "left=80 spawns the successor");
        let newest = track.buildings().last().unwrap();
        assert_eq!(newest.left, 480.0);

        // One-shot: further movement spawns nothing more from this segment
        track.advance(1.0, 0.0, &mut runner, &mut rng);
        assert_eq!(track.len(), 2);
        assert!(track.get(0).unwrap().spawned_next);
    }

    #[test]
    fn test_eviction_threshold() {
        let mut rng = test_rng();
        let mut passed = raw(0, -399.0, 300.0, 50.0, 100.0);
        passed.phase = BuildingPhase::Passed;
        passed.spawned_next = true;
        let mut keeper = raw(1, 100.0, 300.0, 50.0, 100.0);
        keeper.spawned_next = true;
        let mut track = track_with(vec![passed, keeper]);
        let mut runner = Runner::default();

        // Span end at +1: still on screen
        track.advance(0.0, 50.0, &mut runner, &mut rng);
        assert_eq!(track.len(), 2);

        // left=-401, span end at -1: evicted
        track.advance(2.0, 50.0, &mut runner, &mut rng);
        assert_eq!(track.len(), 1);
        assert!(track.get(0).is_none());
        assert!(track.get(1).is_some());
    }

    #[test]
    fn test_underfoot_claim_and_exit() {
        let mut rng = test_rng();
        let mut b = raw(0, 50.0, 100.0, 60.0, 100.0);
        b.spawned_next = true;
        let mut track = track_with(vec![b]);
        let mut runner = Runner::default();
        let runner_x = 45.0;

        // Left edge still right of the runner
        track.advance(0.0, runner_x, &mut runner, &mut rng);
        assert_eq!(runner.current_building, None);

        // Left edge crosses the runner: claimed
        track.advance(10.0, runner_x, &mut runner, &mut rng);
        assert_eq!(runner.current_building, Some(0));
        assert!(runner.was_supported);
        assert!(!runner.airborne, "claiming support does not change flight");

        // Far edge passes the runner: unsupported and forced airborne
        track.advance(100.0, runner_x, &mut runner, &mut rng);
        assert_eq!(runner.current_building, None);
        assert!(runner.airborne);
        assert_eq!(track.get(0).unwrap().phase, BuildingPhase::Passed);
    }

    #[test]
    fn test_exit_and_claim_in_same_pass() {
        // Old segment exits and the next one claims within a single advance;
        // oldest-first scan order means the newer claim wins.
        let mut rng = test_rng();
        let mut old = raw(0, -60.0, 100.0, 60.0, 10.0);
        old.phase = BuildingPhase::Underfoot;
        old.spawned_next = true;
        let next = raw(1, 46.0, 300.0, 80.0, 100.0);
        let mut track = track_with(vec![old, next]);
        let mut runner = Runner::default();
        runner.current_building = Some(0);
        runner.was_supported = true;
        let runner_x = 45.0;

        track.advance(2.0, runner_x, &mut runner, &mut rng);
        assert_eq!(track.get(0).unwrap().phase, BuildingPhase::Passed);
        assert_eq!(track.get(1).unwrap().phase, BuildingPhase::Underfoot);
        assert_eq!(runner.current_building, Some(1));
    }

    #[test]
    fn test_at_most_one_underfoot() {
        let mut rng = test_rng();
        let mut track = Track::new(480.0, &mut rng);
        let mut runner = Runner::default();
        for _ in 0..5000 {
            track.advance(7.0, 45.0, &mut runner, &mut rng);
            let underfoot = track
                .buildings()
                .filter(|b| b.phase == BuildingPhase::Underfoot)
                .count();
            assert!(underfoot <= 1, "more than one underfoot segment");
            match runner.current_building {
                Some(id) => {
                    assert_eq!(track.get(id).unwrap().phase, BuildingPhase::Underfoot)
                }
                None => assert_eq!(underfoot, 0),
            }
        }
    }

    #[test]
    fn test_coverage_never_falls_behind() {
        let mut rng = test_rng();
        let mut track = Track::new(480.0, &mut rng);
        let mut runner = Runner::default();
        let delta = 12.0;
        for _ in 0..5000 {
            track.advance(delta, 45.0, &mut runner, &mut rng);

            // Generation stays ahead of the viewport
            let rightmost = track
                .buildings()
                .map(|b| b.left + b.total_span())
                .fold(f32::MIN, f32::max);
            assert!(rightmost > track.viewport_width);

            // Holes between consecutive segments never exceed the designed
            // gap plus at most one tick of spawn slack
            let buildings: Vec<_> = track.buildings().collect();
            for pair in buildings.windows(2) {
                let hole = pair[1].left - pair[0].right();
                assert!(pair[1].left >= pair[0].left, "queue out of order");
                assert!(hole <= pair[0].gap + delta + 1e-3);
            }
        }
    }
}
