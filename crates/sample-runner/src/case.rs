//! Case-file loader: a flat `key = value` format describing one machining
//! run — stock, one feature, and the four export targets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use swarf_types::{
    AxisDef, ErrorCode, Feature, ProfilePoint, StockKind, StockSpec, TurnPass, TURN_PROFILE_MAX,
    TURN_PROFILE_MIN,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    #[error("missing key: {key}")]
    MissingKey { key: String },

    #[error("invalid value for {key}: {reason}")]
    BadValue { key: String, reason: String },

    #[error("unsupported {key}: {value}")]
    UnsupportedValue { key: String, value: String },
}

impl CaseError {
    /// Status code this error would carry across the API boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            CaseError::UnsupportedValue { .. } => ErrorCode::FeatureNotSupported,
            _ => ErrorCode::InvalidArgument,
        }
    }
}

/// One machining run loaded from a case file.
#[derive(Debug, Clone)]
pub struct SampleCase {
    pub stock: StockSpec,
    pub feature: Feature,
    pub linear_deflection: f64,
    pub angular_deflection: f64,
    pub parallel: bool,
    pub output_dir: PathBuf,
    pub step_file: String,
    pub stl_file: String,
    pub delta_step_file: String,
    pub delta_stl_file: String,
}

impl SampleCase {
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let text = std::fs::read_to_string(path)?;
        let kv = parse_key_values(&text)?;

        let stock = parse_stock(&kv)?;
        let feature = parse_feature(&kv)?;

        Ok(SampleCase {
            stock,
            feature,
            linear_deflection: require_f64(&kv, "output.linearDeflection")?,
            angular_deflection: require_f64(&kv, "output.angularDeflection")?,
            parallel: require_bool01(&kv, "output.parallel")?,
            output_dir: PathBuf::from(require(&kv, "output.dir")?),
            step_file: require(&kv, "output.stepFile")?.to_string(),
            stl_file: require(&kv, "output.stlFile")?.to_string(),
            delta_step_file: require(&kv, "output.deltaStepFile")?.to_string(),
            delta_stl_file: require(&kv, "output.deltaStlFile")?.to_string(),
        })
    }
}

fn parse_key_values(text: &str) -> Result<HashMap<String, String>, CaseError> {
    let mut kv = HashMap::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, value) = trimmed.split_once('=').ok_or_else(|| CaseError::Syntax {
            line,
            reason: "missing '='".to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CaseError::Syntax {
                line,
                reason: "empty key".to_string(),
            });
        }
        kv.insert(key.to_string(), value.trim().to_string());
    }
    Ok(kv)
}

fn require<'a>(kv: &'a HashMap<String, String>, key: &str) -> Result<&'a str, CaseError> {
    kv.get(key)
        .map(String::as_str)
        .ok_or_else(|| CaseError::MissingKey {
            key: key.to_string(),
        })
}

fn find<'a>(kv: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    kv.get(key).map(String::as_str)
}

fn bad(key: &str, reason: impl Into<String>) -> CaseError {
    CaseError::BadValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn require_f64(kv: &HashMap<String, String>, key: &str) -> Result<f64, CaseError> {
    require(kv, key)?
        .parse()
        .map_err(|_| bad(key, "expected a number"))
}

fn require_vec3(kv: &HashMap<String, String>, key: &str) -> Result<[f64; 3], CaseError> {
    let text = require(kv, key)?;
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(bad(key, "expected 3 comma-separated components"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| bad(key, "expected a number"))?;
    }
    Ok(out)
}

fn require_bool01(kv: &HashMap<String, String>, key: &str) -> Result<bool, CaseError> {
    match require(kv, key)? {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(bad(key, format!("expected 0 or 1, got {other}"))),
    }
}

fn axis(kv: &HashMap<String, String>, prefix: &str) -> Result<AxisDef, CaseError> {
    Ok(AxisDef {
        origin: require_vec3(kv, &format!("{prefix}.origin"))?,
        dir: require_vec3(kv, &format!("{prefix}.dir"))?,
        xdir: require_vec3(kv, &format!("{prefix}.xdir"))?,
    })
}

fn parse_stock(kv: &HashMap<String, String>) -> Result<StockSpec, CaseError> {
    let kind = match require(kv, "stock.type")? {
        "BOX" => StockKind::Box,
        "CYLINDER" => StockKind::Cylinder,
        other => return Err(bad("stock.type", format!("unknown kind {other}"))),
    };
    Ok(StockSpec {
        kind,
        p1: require_f64(kv, "stock.p1")?,
        p2: require_f64(kv, "stock.p2")?,
        p3: require_f64(kv, "stock.p3")?,
        axis: axis(kv, "stock.axis")?,
    })
}

/// A turn feature carries either an indexed profile (when `.profile.count`
/// is present) or a single target-diameter pass.
fn turn_pass(kv: &HashMap<String, String>, prefix: &str) -> Result<TurnPass, CaseError> {
    let count_key = format!("{prefix}.profile.count");
    let Some(count_text) = find(kv, &count_key) else {
        return Ok(TurnPass::Single {
            target_diameter: require_f64(kv, &format!("{prefix}.targetDiameter"))?,
            length: require_f64(kv, &format!("{prefix}.length"))?,
        });
    };

    let count: usize = count_text
        .parse()
        .map_err(|_| bad(&count_key, "expected an integer"))?;
    if !(TURN_PROFILE_MIN..=TURN_PROFILE_MAX).contains(&count) {
        return Err(bad(
            &count_key,
            format!("must be {TURN_PROFILE_MIN}..={TURN_PROFILE_MAX}"),
        ));
    }

    let mut points = Vec::with_capacity(count);
    for index in 0..count {
        points.push(ProfilePoint {
            z: require_f64(kv, &format!("{prefix}.profile.{index}.z"))?,
            radius: require_f64(kv, &format!("{prefix}.profile.{index}.radius"))?,
        });
    }
    Ok(TurnPass::Profile { points })
}

fn parse_feature(kv: &HashMap<String, String>) -> Result<Feature, CaseError> {
    match require(kv, "feature.type")? {
        "DRILL" => Ok(Feature::Drill {
            radius: require_f64(kv, "feature.drill.radius")?,
            depth: require_f64(kv, "feature.drill.depth")?,
            axis: axis(kv, "feature.drill.axis")?,
        }),
        "POCKET_RECT" => Ok(Feature::PocketRect {
            width: require_f64(kv, "feature.pocketRect.width")?,
            height: require_f64(kv, "feature.pocketRect.height")?,
            depth: require_f64(kv, "feature.pocketRect.depth")?,
            axis: axis(kv, "feature.pocketRect.axis")?,
        }),
        "TURN_OD" => Ok(Feature::TurnOd {
            pass: turn_pass(kv, "feature.turnOd")?,
            axis: axis(kv, "feature.turnOd.axis")?,
        }),
        "TURN_ID" => Ok(Feature::TurnId {
            pass: turn_pass(kv, "feature.turnId")?,
            axis: axis(kv, "feature.turnId.axis")?,
        }),
        other => Err(CaseError::UnsupportedValue {
            key: "feature.type".to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> HashMap<String, String> {
        parse_key_values(text).unwrap()
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let kv = parse("# header\n\n  a = 1 \nb=two\n");
        assert_eq!(kv.get("a").map(String::as_str), Some("1"));
        assert_eq!(kv.get("b").map(String::as_str), Some("two"));
    }

    #[test]
    fn line_without_equals_is_a_syntax_error() {
        let err = parse_key_values("just words\n").unwrap_err();
        assert!(matches!(err, CaseError::Syntax { line: 1, .. }));
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn vec3_wants_exactly_three_components() {
        let kv = parse("v = 1,2\nw = 1,2,3,4\nok = 1, 2, 3\n");
        assert!(require_vec3(&kv, "v").is_err());
        assert!(require_vec3(&kv, "w").is_err());
        assert_eq!(require_vec3(&kv, "ok").unwrap(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn bool_accepts_only_zero_and_one() {
        let kv = parse("yes = 1\nno = 0\nmaybe = true\n");
        assert!(require_bool01(&kv, "yes").unwrap());
        assert!(!require_bool01(&kv, "no").unwrap());
        assert!(require_bool01(&kv, "maybe").is_err());
    }

    #[test]
    fn unknown_feature_type_maps_to_feature_not_supported() {
        let kv = parse("feature.type = CHAMFER\n");
        let err = parse_feature(&kv).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FeatureNotSupported);
    }

    #[test]
    fn profile_count_switches_to_indexed_points() {
        let text = "\
feature.type = TURN_ID
feature.turnId.profile.count = 2
feature.turnId.profile.0.z = 0
feature.turnId.profile.0.radius = 5
feature.turnId.profile.1.z = 10
feature.turnId.profile.1.radius = 5
feature.turnId.axis.origin = 0,0,0
feature.turnId.axis.dir = 0,0,1
feature.turnId.axis.xdir = 1,0,0
";
        let feature = parse_feature(&parse(text)).unwrap();
        match feature {
            Feature::TurnId {
                pass: TurnPass::Profile { points },
                ..
            } => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[1].z, 10.0);
            }
            other => panic!("unexpected feature: {other:?}"),
        }
    }

    #[test]
    fn profile_count_out_of_range_is_rejected() {
        let kv = parse(
            "feature.type = TURN_OD\nfeature.turnOd.profile.count = 1\n\
             feature.turnOd.axis.origin = 0,0,0\nfeature.turnOd.axis.dir = 0,0,1\n\
             feature.turnOd.axis.xdir = 1,0,0\n",
        );
        assert!(parse_feature(&kv).is_err());
    }
}
