//! Structural checks for rubric feedback. Same shallow depth as case
//! validation: the four criterion keys must exist and `totalScore` must be
//! numeric. The total is NOT cross-checked against the per-criterion sum.

use serde_json::Value;

/// The fixed criterion key set every rubric evaluation must carry.
pub const CRITERION_KEYS: [&str; 4] = ["content", "style", "strategy", "overall"];

/// Validates the shape of generated rubric feedback, returning the first
/// violation found as a human-readable reason.
pub fn validate_rubric_feedback(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or("response is not a JSON object")?;

    let criteria = obj
        .get("criteria")
        .and_then(Value::as_object)
        .ok_or("`criteria` is missing or not an object")?;
    for key in CRITERION_KEYS {
        if !criteria.contains_key(key) {
            return Err(format!("`criteria.{key}` is missing"));
        }
    }

    if !obj.get("totalScore").is_some_and(Value::is_number) {
        return Err("`totalScore` is missing or not a number".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feedback() -> Value {
        json!({
            "criteria": {
                "content": {"score": 26, "feedback": "Solid evidence.", "suggestions": "Cite studies."},
                "style": {"score": 24, "feedback": "Clear delivery.", "suggestions": "Vary pace."},
                "strategy": {"score": 27, "feedback": "Good structure.", "suggestions": "Signpost more."},
                "overall": {"score": 9, "feedback": "Effective speech."}
            },
            "totalScore": 86,
            "keyTakeaways": ["Lead with the strongest point.", "Slow down."]
        })
    }

    #[test]
    fn test_well_formed_feedback_passes() {
        assert!(validate_rubric_feedback(&feedback()).is_ok());
    }

    #[test]
    fn test_missing_criterion_key_fails() {
        let mut value = feedback();
        value["criteria"].as_object_mut().unwrap().remove("strategy");
        let err = validate_rubric_feedback(&value).unwrap_err();
        assert!(err.contains("strategy"));
    }

    #[test]
    fn test_criteria_not_an_object_fails() {
        let mut value = feedback();
        value["criteria"] = json!(["content", "style"]);
        let err = validate_rubric_feedback(&value).unwrap_err();
        assert!(err.contains("criteria"));
    }

    #[test]
    fn test_missing_total_score_fails() {
        let mut value = feedback();
        value.as_object_mut().unwrap().remove("totalScore");
        let err = validate_rubric_feedback(&value).unwrap_err();
        assert!(err.contains("totalScore"));
    }

    #[test]
    fn test_string_total_score_fails() {
        let mut value = feedback();
        value["totalScore"] = json!("86");
        let err = validate_rubric_feedback(&value).unwrap_err();
        assert!(err.contains("totalScore"));
    }

    #[test]
    fn test_total_score_sum_divergence_is_not_rejected() {
        // 26 + 24 + 27 + 9 = 86, but a divergent total still validates.
        let mut value = feedback();
        value["totalScore"] = json!(91);
        assert!(validate_rubric_feedback(&value).is_ok());
    }

    #[test]
    fn test_non_object_response_fails() {
        let err = validate_rubric_feedback(&json!("nope")).unwrap_err();
        assert!(err.contains("not a JSON object"));
    }
}
