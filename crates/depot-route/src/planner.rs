//! Delivery planning: stop order, multi-leg routing, instruction compilation.
//!
//! # Pipeline
//!
//! 1. Ask the [`StopSequencer`] for a candidate order; keep it only if it is
//!    strictly shorter in straight-line miles.
//! 2. Route depot → stop₁ → … → stopₙ → depot with one [`PathFinder`] call per
//!    leg, appending every leg onto one [`Path`].  The first failing leg aborts
//!    the plan; no partial instruction list is ever returned.
//! 3. Walk the path once, emitting `Proceed` when the street changes or a
//!    delivery interrupts it, `Turn` on a street change that is not straight
//!    ahead, and `Deliver` for every stop at each coordinate reached.

use tracing::{debug, info};

use depot_core::{DeliveryStop, GeoCoord, StreetSegment, angle_between};
use depot_map::StreetMap;

use crate::instruction::{Compass, Instruction, TurnDirection};
use crate::optimizer::{NearestNeighbor, StopSequencer};
use crate::router::{Path, PathFinder};
use crate::{ConfigError, RouteError};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Planner settings.  `PlannerConfig::default()` is the standard behaviour.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Consult the stop sequencer.  When `false` stops are visited in the
    /// order given.
    pub reorder_stops: bool,

    /// Half-width, in degrees, of the band around 0°/360° in which a street
    /// change counts as continuing straight and emits no `Turn`.
    pub straight_tolerance_deg: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { reorder_stops: true, straight_tolerance_deg: 1.0 }
    }
}

impl PlannerConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidTolerance`] unless `straight_tolerance_deg` is
    /// strictly between 0 and 180.  At 0 the no-turn band is empty and an
    /// exactly straight street change reads as a left turn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.straight_tolerance_deg;
        let in_band = tolerance > 0.0 && tolerance < 180.0;
        if !in_band {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(())
    }
}

// ── DeliveryPlan ──────────────────────────────────────────────────────────────

/// A complete single-vehicle route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    /// Stops in the order they are visited.
    pub stops: Vec<DeliveryStop>,
    /// `true` if `stops` differs from the input order.
    pub reordered: bool,
    pub instructions: Vec<Instruction>,
    /// Road miles from the depot back to the depot.
    pub total_miles: f64,
}

impl DeliveryPlan {
    pub fn deliveries(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_deliver()).count()
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Plans depot → stops → depot routes over a borrowed [`StreetMap`].
///
/// The sequencer is a type parameter so alternative heuristics can be swapped
/// in; the default is [`NearestNeighbor`].
pub struct RoutePlanner<'a, Q = NearestNeighbor> {
    finder:    PathFinder<'a>,
    sequencer: Q,
    config:    PlannerConfig,
}

impl<'a> RoutePlanner<'a, NearestNeighbor> {
    /// Planner with [`PlannerConfig::default`].
    pub fn new(map: &'a StreetMap) -> Self {
        Self { finder: PathFinder::new(map), sequencer: NearestNeighbor, config: PlannerConfig::default() }
    }

    /// # Errors
    ///
    /// See [`PlannerConfig::validate`].
    pub fn with_config(map: &'a StreetMap, config: PlannerConfig) -> Result<Self, ConfigError> {
        Self::with_sequencer(map, NearestNeighbor, config)
    }
}

impl<'a, Q: StopSequencer> RoutePlanner<'a, Q> {
    /// # Errors
    ///
    /// See [`PlannerConfig::validate`].
    pub fn with_sequencer(
        map: &'a StreetMap,
        sequencer: Q,
        config: PlannerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { finder: PathFinder::new(map), sequencer, config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route that leaves `depot`, serves every stop, and returns.
    ///
    /// An empty stop list still checks that `depot` is on the map and yields a
    /// plan with no instructions and zero miles.
    ///
    /// # Errors
    ///
    /// The first [`RouteError`] from any leg, unchanged.
    pub fn plan(&self, depot: GeoCoord, stops: &[DeliveryStop]) -> Result<DeliveryPlan, RouteError> {
        let (order, reordered) = self.choose_order(depot, stops);
        let path = self.route_legs(depot, &order)?;
        let instructions = compile(depot, &order, &path.segments, self.config.straight_tolerance_deg);

        info!(
            stops = order.len(),
            reordered,
            segments = path.segments.len(),
            instructions = instructions.len(),
            miles = path.miles,
            "delivery plan ready"
        );

        Ok(DeliveryPlan { stops: order, reordered, instructions, total_miles: path.miles })
    }

    fn choose_order(&self, depot: GeoCoord, stops: &[DeliveryStop]) -> (Vec<DeliveryStop>, bool) {
        if !self.config.reorder_stops || stops.len() < 2 {
            return (stops.to_vec(), false);
        }

        let proposal = self.sequencer.reorder(depot, stops);
        if proposal.improves() {
            debug!(
                from = proposal.original_miles,
                to = proposal.reordered_miles,
                "accepted reordered stops"
            );
            let changed = proposal.stops.as_slice() != stops;
            (proposal.stops, changed)
        } else {
            debug!(
                original = proposal.original_miles,
                proposed = proposal.reordered_miles,
                "kept original stop order"
            );
            (stops.to_vec(), false)
        }
    }

    fn route_legs(&self, depot: GeoCoord, order: &[DeliveryStop]) -> Result<Path, RouteError> {
        let waypoints: Vec<GeoCoord> = std::iter::once(depot)
            .chain(order.iter().map(|s| s.location))
            .chain(std::iter::once(depot))
            .collect();

        let mut path = Path::default();
        for leg in waypoints.windows(2) {
            self.finder.extend_path(leg[0], leg[1], &mut path)?;
        }
        Ok(path)
    }
}

// ── Instruction compilation ───────────────────────────────────────────────────

/// Emits `Deliver` instructions for stops in visiting order.
struct Deliveries<'s> {
    stops: &'s [DeliveryStop],
    next:  usize,
}

impl<'s> Deliveries<'s> {
    fn due_at(&self, at: &GeoCoord) -> bool {
        self.stops.get(self.next).is_some_and(|s| s.location == *at)
    }

    /// Deliver every consecutive pending stop located at `at`.
    fn flush_at(&mut self, at: &GeoCoord, out: &mut Vec<Instruction>) {
        while self.due_at(at) {
            out.push(Instruction::Deliver { item: self.stops[self.next].item.clone() });
            self.next += 1;
        }
    }
}

fn proceed(opening: &StreetSegment, miles: f64) -> Instruction {
    Instruction::Proceed {
        direction: Compass::from_bearing(opening.bearing_deg()),
        street: opening.name.clone(),
        miles,
    }
}

/// Turn a depot-to-depot segment sequence into instructions.
///
/// `stops` must be in visiting order.  Stops at the depot are delivered before
/// any movement, stops at a junction are delivered when that junction is
/// reached, and stops at the final coordinate after the last `Proceed`.
pub(crate) fn compile(
    depot: GeoCoord,
    stops: &[DeliveryStop],
    segments: &[StreetSegment],
    straight_tolerance_deg: f64,
) -> Vec<Instruction> {
    let mut out = Vec::new();
    let mut deliveries = Deliveries { stops, next: 0 };

    deliveries.flush_at(&depot, &mut out);

    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return out;
    };

    // Opening segment of the street being travelled, and miles on it so far.
    let mut opening = first;
    let mut miles = 0.0;

    for pair in segments.windows(2) {
        let (seg, next) = (&pair[0], &pair[1]);
        miles += seg.length_miles();

        let junction = seg.end;
        let street_change = next.name != seg.name;
        if !street_change && !deliveries.due_at(&junction) {
            continue;
        }

        out.push(proceed(opening, miles));
        deliveries.flush_at(&junction, &mut out);

        if street_change {
            let angle = angle_between(seg, next);
            if let Some(direction) = TurnDirection::from_angle(angle, straight_tolerance_deg) {
                out.push(Instruction::Turn { direction, street: next.name.clone() });
            }
        }

        opening = next;
        miles = 0.0;
    }

    miles += last.length_miles();
    out.push(proceed(opening, miles));
    deliveries.flush_at(&last.end, &mut out);

    debug_assert_eq!(deliveries.next, stops.len(), "every stop lies on the path");
    out
}
