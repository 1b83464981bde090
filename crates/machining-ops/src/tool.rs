//! Removal-tool synthesis: turns a declarative feature into the solid
//! volume a machining pass removes.

use kernel_bridge::{Frame, Kernel, KernelError, KernelSolidHandle};
use swarf_types::{Feature, ProfilePoint, TurnPass, TURN_PROFILE_MAX, TURN_PROFILE_MIN};

use crate::types::{into_boolean_failed, OpError};

/// Profile segments shorter than this are no-ops rather than errors.
const SEGMENT_EPS: f64 = 1.0e-9;

/// Build the removal tool for a feature against the given stock solid.
///
/// The stock is only consulted for its bounding box (OD turning needs an
/// outer bound); the tool itself may extend past the stock freely — the
/// boolean cut computes whatever intersection exists. On failure no solid
/// is left behind in the kernel.
pub fn synthesize_tool(
    kernel: &mut dyn Kernel,
    stock: &KernelSolidHandle,
    feature: &Feature,
) -> Result<KernelSolidHandle, OpError> {
    match feature {
        Feature::Drill {
            radius,
            depth,
            axis,
        } => {
            if *radius <= 0.0 || *depth <= 0.0 {
                return Err(OpError::invalid("drill radius and depth must be positive"));
            }
            let frame = Frame::resolve(axis)?;
            Ok(kernel.make_cylinder(&frame, *radius, *depth)?)
        }

        Feature::PocketRect {
            width,
            height,
            depth,
            axis,
        } => {
            if *width <= 0.0 || *height <= 0.0 || *depth <= 0.0 {
                return Err(OpError::invalid("pocket dimensions must be positive"));
            }
            let frame = Frame::resolve(axis)?;
            // Center the rectangle on the declared origin instead of
            // corner-anchoring it.
            let corner = frame.translated_in_plane(-0.5 * width, -0.5 * height);
            Ok(kernel.make_box(&corner, *width, *height, *depth)?)
        }

        Feature::TurnOd { pass, axis } => {
            let frame = Frame::resolve(axis)?;
            let outer = outer_bound(kernel, stock)?;
            match pass {
                TurnPass::Single {
                    target_diameter,
                    length,
                } => {
                    if *target_diameter <= 0.0 || *length <= 0.0 {
                        return Err(OpError::invalid(
                            "turn diameter and length must be positive",
                        ));
                    }
                    annulus(kernel, &frame, outer, target_diameter * 0.5, *length)
                }
                TurnPass::Profile { points } => profile_tool(kernel, &frame, points, Some(outer)),
            }
        }

        Feature::TurnId { pass, axis } => {
            let frame = Frame::resolve(axis)?;
            match pass {
                TurnPass::Single {
                    target_diameter,
                    length,
                } => {
                    if *target_diameter <= 0.0 || *length <= 0.0 {
                        return Err(OpError::invalid(
                            "turn diameter and length must be positive",
                        ));
                    }
                    // Boring removes material inside the radius; a plain
                    // cylinder is the whole tool.
                    Ok(kernel.make_cylinder(&frame, target_diameter * 0.5, *length)?)
                }
                TurnPass::Profile { points } => profile_tool(kernel, &frame, points, None),
            }
        }
    }
}

/// Conservative outer radius for OD turning: twice the largest span of the
/// stock's bounding box, so the annulus's outer cylinder contains the stock
/// along every direction regardless of where the turning axis sits.
fn outer_bound(kernel: &mut dyn Kernel, stock: &KernelSolidHandle) -> Result<f64, OpError> {
    let aabb = kernel.bounding_box(stock).map_err(|e| match e {
        KernelError::EmptyBoundingBox => OpError::BooleanFailed {
            reason: "stock bounding box is void".to_string(),
        },
        other => OpError::Kernel(other),
    })?;
    Ok(aabb.max_span() * 2.0)
}

/// Annulus segment: outer cylinder minus inner cylinder on the same axis.
/// Both operand cylinders are released regardless of the cut outcome.
fn annulus(
    kernel: &mut dyn Kernel,
    frame: &Frame,
    outer_radius: f64,
    inner_radius: f64,
    length: f64,
) -> Result<KernelSolidHandle, OpError> {
    let outer = kernel.make_cylinder(frame, outer_radius, length)?;
    let inner = kernel.make_cylinder(frame, inner_radius, length)?;
    let cut = kernel.boolean_cut(&outer, &inner);
    kernel.release(&outer);
    kernel.release(&inner);
    cut.map_err(into_boolean_failed)
}

/// Decompose a profile into per-segment tools and fuse-accumulate them.
///
/// `outer_radius` is Some for OD turning (segments become annuli and
/// stations at or beyond the bound are skipped) and None for ID boring
/// (segments are plain cylinders).
///
/// Building one tool per segment instead of revolving a 2D profile curve is
/// a known simplification: more booleans, but robust against
/// self-intersecting and non-monotonic profiles.
fn profile_tool(
    kernel: &mut dyn Kernel,
    frame: &Frame,
    points: &[ProfilePoint],
    outer_radius: Option<f64>,
) -> Result<KernelSolidHandle, OpError> {
    if points.len() < TURN_PROFILE_MIN || points.len() > TURN_PROFILE_MAX {
        return Err(OpError::invalid(format!(
            "profile must have {TURN_PROFILE_MIN}..={TURN_PROFILE_MAX} points, got {}",
            points.len()
        )));
    }

    let mut accumulated: Option<KernelSolidHandle> = None;

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        if p0.radius <= 0.0 || p1.z < p0.z {
            release_opt(kernel, accumulated);
            return Err(OpError::invalid(
                "profile radii must be positive and z non-decreasing",
            ));
        }

        let segment_length = p1.z - p0.z;
        if segment_length <= SEGMENT_EPS {
            continue;
        }
        if let Some(outer) = outer_radius {
            // Target radius already clears the oversized bound: nothing to
            // remove at this station.
            if p0.radius >= outer - SEGMENT_EPS {
                continue;
            }
        }

        let segment_frame = frame.offset_along_z(p0.z);
        let segment = match outer_radius {
            Some(outer) => annulus(kernel, &segment_frame, outer, p0.radius, segment_length),
            None => kernel
                .make_cylinder(&segment_frame, p0.radius, segment_length)
                .map_err(OpError::from),
        };
        let segment = match segment {
            Ok(s) => s,
            Err(e) => {
                release_opt(kernel, accumulated);
                return Err(e);
            }
        };

        accumulated = Some(match accumulated.take() {
            None => segment,
            Some(tool) => {
                let fused = kernel.boolean_fuse(&tool, &segment);
                kernel.release(&tool);
                kernel.release(&segment);
                match fused {
                    Ok(f) => f,
                    Err(e) => return Err(into_boolean_failed(e)),
                }
            }
        });
    }

    accumulated.ok_or_else(|| OpError::invalid("profile describes no removable segment"))
}

fn release_opt(kernel: &mut dyn Kernel, handle: Option<KernelSolidHandle>) {
    if let Some(h) = handle {
        kernel.release(&h);
    }
}
