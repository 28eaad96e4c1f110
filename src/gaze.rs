use anyhow::{Context, Result};
use colored::*;

use crate::calibration::{CalibrationSession, SessionState};
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::profile::{ProfileStore, UserProfile};
use crate::speech::{direction_phrase, SpeechSink, CALIBRATION_COMPLETE};
use crate::trig;
use crate::types::{CameraFacing, Direction, DirectionDistance, Point};

/// Nominal pupil radius in pixels, folded into the center-band comparison.
pub const PUPIL_RADIUS: f32 = 10.0;

/// Degrees separating the top and bottom variants of a left/right gaze.
pub const ANGLE_MARGIN: f32 = 30.0;

// =========================================================================
// Derived geometry
// =========================================================================
// Everything the classifier needs from one pupil sample, measured against
// the user's center baseline and the fixed frame origin (0, 0).
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub distance_to_center: f32,
    pub hypotenuse_center: f32,
    pub opposite: f32,
    pub adjacent: f32,
    pub hypotenuse: f32,
    pub angle: f32,
}

impl Geometry {
    pub fn derive(point: Point, center: Point) -> Self {
        let origin = Point::new(0.0, 0.0);

        let distance_to_center = trig::hypotenuse(
            trig::distance(point.x, center.x),
            trig::distance(point.y, center.y),
        );
        let hypotenuse_center = trig::hypotenuse(
            trig::distance(origin.x, center.x),
            trig::distance(origin.y, center.y),
        );

        let opposite = trig::distance(point.x, origin.x);
        let adjacent = trig::distance(point.y, origin.y);
        let hypotenuse = trig::hypotenuse(opposite, adjacent);
        let angle = trig::angle_tangent(opposite, adjacent);

        Self {
            distance_to_center,
            hypotenuse_center,
            opposite,
            adjacent,
            hypotenuse,
            angle,
        }
    }
}

// =========================================================================
// Nine-way classifier (pure)
// =========================================================================

fn refine_by_margin(base: Direction, angle: f32) -> Direction {
    // Exactly ANGLE_MARGIN matches neither bound and keeps the base direction
    match base {
        Direction::Right => {
            if angle < ANGLE_MARGIN {
                Direction::TopRight
            } else if angle > ANGLE_MARGIN {
                Direction::BottomRight
            } else {
                base
            }
        }
        Direction::Left => {
            if angle < ANGLE_MARGIN {
                Direction::TopLeft
            } else if angle > ANGLE_MARGIN {
                Direction::BottomLeft
            } else {
                base
            }
        }
        _ => base,
    }
}

/// Classifies one pupil sample against the calibrated average angle.
/// Decision order: inward gaze, then the center band, then outward; the
/// camera facing mirrors left/right because front capture is flipped.
pub fn classify_direction(
    geometry: &Geometry,
    facing: CameraFacing,
    average_angle: f32,
) -> Direction {
    let angle = geometry.angle;

    if angle < average_angle {
        // Inward gaze
        let base = match facing {
            CameraFacing::Back => Direction::Right,
            CameraFacing::Front => Direction::Left,
        };
        refine_by_margin(base, angle)
    } else if trig::distance(angle, average_angle) <= average_angle + 5.0 {
        // Center band: resolve top/bottom by how far the pupil reaches
        // compared to the center's own distance from the origin
        let reach = geometry.hypotenuse + PUPIL_RADIUS;
        if reach < geometry.hypotenuse_center {
            Direction::Top
        } else if reach > geometry.hypotenuse_center {
            Direction::Bottom
        } else {
            Direction::Center
        }
    } else {
        // Outward gaze
        let base = match facing {
            CameraFacing::Back => Direction::Left,
            CameraFacing::Front => Direction::Right,
        };
        refine_by_margin(base, angle)
    }
}

/// Labels the Euclidean distance between two points with a direction.
pub fn direction_distance(direction: Direction, a: Point, b: Point) -> DirectionDistance {
    let distance = trig::hypotenuse(trig::distance(a.x, b.x), trig::distance(a.y, b.y));
    DirectionDistance { direction, distance }
}

// =========================================================================
// Engine: session + profile + speech + debounce gate
// =========================================================================

/// The per-session gaze engine. Owns the calibration session, persists the
/// user profile, emits speech cues, and funnels classification through the
/// single-in-flight dispatcher.
pub struct GazeEngine<S: SpeechSink> {
    session: CalibrationSession,
    dispatcher: Dispatcher,
    store: ProfileStore,
    speech: S,
    facing: CameraFacing,
    on_error: Box<dyn FnMut(anyhow::Error)>,
    capture_restart: Option<Box<dyn FnMut() -> Result<()>>>,
}

impl<S: SpeechSink> GazeEngine<S> {
    pub fn new(
        data_dir: &str,
        frames_per_second: u32,
        facing: CameraFacing,
        speech: S,
    ) -> Result<Self> {
        let store = ProfileStore::new(data_dir)?;
        let mut session = CalibrationSession::new(frames_per_second);

        // A previously calibrated user keeps their saved center; only the
        // runtime angle baseline has to be re-collected.
        if store.profile.calibrated {
            session.restore_center(Point::new(store.profile.center_x, store.profile.center_y));
        }

        Ok(Self {
            session,
            dispatcher: Dispatcher::new(),
            store,
            speech,
            facing,
            on_error: Box::new(|err| eprintln!("{} {:#}", "Dispatch error:".red(), err)),
            capture_restart: None,
        })
    }

    pub fn session(&self) -> &CalibrationSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.store.profile
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// Replaces the default stderr error handler for dispatch failures.
    pub fn set_error_handler(&mut self, handler: impl FnMut(anyhow::Error) + 'static) {
        self.on_error = Box::new(handler);
    }

    /// Hook invoked after a reset so the frame source restarts capture.
    pub fn set_capture_restart(&mut self, hook: impl FnMut() -> Result<()> + 'static) {
        self.capture_restart = Some(Box::new(hook));
    }

    /// Discards all baselines and starts a fresh calibration cycle. The
    /// uncalibrated flag is persisted first, so a crash mid-calibration
    /// leaves the profile correctly uncalibrated.
    pub fn reset_calibration(&mut self) -> Result<()> {
        self.store.profile.calibrated = false;
        self.store
            .save()
            .context("Failed to persist uncalibrated profile")?;

        self.session.reset();

        if let Some(restart) = self.capture_restart.as_mut() {
            restart().context("Failed to restart capture")?;
        }
        Ok(())
    }

    /// Full per-frame path: calibrate if calibrating, collect the angle
    /// baseline once the center exists, and classify when the host's
    /// cadence gate says to act. Returns `None` for every frame that does
    /// not produce a direction decision.
    pub fn process_sample(&mut self, point: Point, should_act: bool) -> Result<Option<Direction>> {
        if let Some(center) = self.session.observe_position(point) {
            self.store.profile.center_x = center.x;
            self.store.profile.center_y = center.y;
            self.store.profile.calibrated = true;
            self.store.save().context("Failed to persist center point")?;

            // The product has always announced "left" here rather than a
            // per-direction confirmation; users rely on hearing it, so the
            // cue is kept verbatim.
            self.speech.speak(direction_phrase(Direction::Left));
            self.speech.speak(CALIBRATION_COMPLETE);
        }

        let Some(center) = self.session.center() else {
            return Ok(None);
        };
        let geometry = Geometry::derive(point, center);

        if self.session.average_angle().is_none() {
            self.session.observe_angle(geometry.angle);
        }
        let Some(average_angle) = self.session.average_angle() else {
            return Ok(None);
        };

        if !should_act {
            return Ok(None);
        }

        self.speech.cancel();

        let generation = self.session.generation();
        let calibrating = self.session.is_calibrating();
        let facing = self.facing;
        let outcome = self.dispatcher.try_dispatch(move || {
            if calibrating {
                return Ok(None);
            }
            Ok(Some(classify_direction(&geometry, facing, average_angle)))
        });

        let direction = match outcome {
            DispatchOutcome::Completed(direction) => direction,
            DispatchOutcome::Dropped => None,
            DispatchOutcome::Failed(err) => {
                (self.on_error)(err);
                None
            }
        };

        // A reset issued while the workload ran invalidates its result
        if self.session.generation() != generation {
            return Ok(None);
        }
        Ok(direction)
    }

    /// Simple proximity query: ranks candidate directions by distance to the
    /// pupil and returns the nearest. With only the center baseline as a
    /// candidate this always answers `Center`; absent while calibrating.
    pub fn nearest_direction(&self, point: Point) -> Option<Direction> {
        if self.session.is_calibrating() {
            return None;
        }
        let center = self.session.center()?;

        let candidates = vec![direction_distance(Direction::Center, point, center)];
        candidates
            .into_iter()
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .map(|d| d.direction)
    }
}
