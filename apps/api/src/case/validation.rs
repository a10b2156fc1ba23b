//! Structural checks applied to parsed model output before it is handed to
//! a caller. Deliberately shallow — presence and minimum count, not semantic
//! correctness. Factual quality is steered at the prompt level; a validator
//! cannot verify it.

use serde_json::Value;

/// Minimum number of ARES-I points a valid case carries.
/// Extra points are tolerated and never trimmed.
pub const MIN_POINTS: usize = 6;

const POINT_FIELDS: [&str; 5] = ["assertion", "reasoning", "evidence", "source", "impact"];

/// Validates the shape of a generated case, returning the first violation
/// found as a human-readable reason.
pub fn validate_debate_case(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or("response is not a JSON object")?;

    non_empty_string(obj.get("introduction"), "introduction")?;

    let points = obj
        .get("points")
        .and_then(Value::as_array)
        .ok_or("`points` is missing or not an array")?;
    if points.len() < MIN_POINTS {
        return Err(format!(
            "expected at least {MIN_POINTS} points, got {}",
            points.len()
        ));
    }
    for (i, point) in points.iter().enumerate() {
        validate_point(point).map_err(|reason| format!("point {}: {reason}", i + 1))?;
    }

    non_empty_string(obj.get("conclusion"), "conclusion")?;

    let allocation = obj
        .get("speakerAllocation")
        .and_then(Value::as_object)
        .ok_or("`speakerAllocation` is missing or not an object")?;
    for speaker in ["speaker1", "speaker2"] {
        let list = allocation
            .get(speaker)
            .and_then(Value::as_array)
            .ok_or_else(|| format!("`speakerAllocation.{speaker}` is missing or not an array"))?;
        if list.is_empty() {
            return Err(format!("`speakerAllocation.{speaker}` is empty"));
        }
    }

    Ok(())
}

/// Validates a single ARES-I unit: all five fields present and non-empty.
pub fn validate_point(value: &Value) -> Result<(), String> {
    let obj = value.as_object().ok_or("not a JSON object")?;
    for field in POINT_FIELDS {
        non_empty_string(obj.get(field), field)?;
    }
    Ok(())
}

fn non_empty_string(value: Option<&Value>, field: &str) -> Result<(), String> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(()),
        Some(_) => Err(format!("`{field}` is empty")),
        None => Err(format!("`{field}` is missing or not a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point(n: usize) -> Value {
        json!({
            "assertion": format!("Assertion {n}"),
            "reasoning": format!("Reasoning {n}"),
            "evidence": format!("Evidence {n}"),
            "source": format!("Source {n}"),
            "impact": format!("Impact {n}"),
        })
    }

    fn case_with_points(count: usize) -> Value {
        json!({
            "introduction": "Framing prose for the motion.",
            "points": (1..=count).map(point).collect::<Vec<_>>(),
            "conclusion": "Closing summary of the case.",
            "speakerAllocation": {
                "speaker1": ["Point 1", "Point 2", "Point 3"],
                "speaker2": ["Point 4", "Point 5", "Point 6"]
            }
        })
    }

    #[test]
    fn test_valid_six_point_case_passes() {
        assert!(validate_debate_case(&case_with_points(6)).is_ok());
    }

    #[test]
    fn test_extra_points_are_tolerated() {
        assert!(validate_debate_case(&case_with_points(8)).is_ok());
    }

    #[test]
    fn test_five_points_fail_regardless_of_field_completeness() {
        let err = validate_debate_case(&case_with_points(5)).unwrap_err();
        assert!(err.contains("at least 6"));
        assert!(err.contains("got 5"));
    }

    #[test]
    fn test_point_with_empty_evidence_fails() {
        let mut case = case_with_points(6);
        case["points"][2]["evidence"] = json!("");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("point 3"));
        assert!(err.contains("evidence"));
    }

    #[test]
    fn test_point_missing_source_fails() {
        let mut case = case_with_points(6);
        case["points"][0].as_object_mut().unwrap().remove("source");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("point 1"));
        assert!(err.contains("source"));
    }

    #[test]
    fn test_missing_introduction_fails() {
        let mut case = case_with_points(6);
        case.as_object_mut().unwrap().remove("introduction");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("introduction"));
    }

    #[test]
    fn test_whitespace_conclusion_fails() {
        let mut case = case_with_points(6);
        case["conclusion"] = json!("   ");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("conclusion"));
    }

    #[test]
    fn test_missing_speaker_allocation_fails() {
        let mut case = case_with_points(6);
        case.as_object_mut().unwrap().remove("speakerAllocation");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("speakerAllocation"));
    }

    #[test]
    fn test_empty_speaker_list_fails() {
        let mut case = case_with_points(6);
        case["speakerAllocation"]["speaker2"] = json!([]);
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("speaker2"));
    }

    #[test]
    fn test_incomplete_partition_is_not_rejected() {
        // Presence check only — a lopsided allocation still validates.
        let mut case = case_with_points(6);
        case["speakerAllocation"]["speaker1"] = json!(["Point 1"]);
        case["speakerAllocation"]["speaker2"] = json!(["Point 2"]);
        assert!(validate_debate_case(&case).is_ok());
    }

    #[test]
    fn test_points_not_an_array_fails() {
        let mut case = case_with_points(6);
        case["points"] = json!("not an array");
        let err = validate_debate_case(&case).unwrap_err();
        assert!(err.contains("points"));
    }

    #[test]
    fn test_non_object_response_fails() {
        let err = validate_debate_case(&json!([1, 2, 3])).unwrap_err();
        assert!(err.contains("not a JSON object"));
    }

    #[test]
    fn test_validate_point_passes_on_full_unit() {
        assert!(validate_point(&point(1)).is_ok());
    }

    #[test]
    fn test_validate_point_rejects_numeric_field() {
        let mut p = point(1);
        p["impact"] = json!(42);
        let err = validate_point(&p).unwrap_err();
        assert!(err.contains("impact"));
    }
}
