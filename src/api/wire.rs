//! JSON bodies exchanged with the imaging server.
//!
//! Every response carries `success`; the server's own 400/500 answers only
//! carry `error`, so a missing flag reads as `false`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudyMetadata {
    #[serde(default = "unknown")]
    pub patient_name: String,
    #[serde(default = "unknown")]
    pub patient_id: String,
    #[serde(default = "unknown")]
    pub study_date: String,
    #[serde(default = "unknown")]
    pub modality: String,
    pub columns: u32,
    pub rows: u32,
    #[serde(default)]
    pub bits_stored: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DicomDecodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub metadata: Option<StudyMetadata>,
    #[serde(default)]
    pub window_center: Option<f64>,
    #[serde(default)]
    pub window_width: Option<f64>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowAdjustRequest {
    pub image_data: String,
    pub window_center: f64,
    pub window_width: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowAdjustResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlateDetectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
}

fn unknown() -> String {
    "Unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_response_reads_all_fields() {
        let body = json!({
            "success": true,
            "image": "data:image/jpeg;base64,AAAA",
            "metadata": {
                "patient_name": "DOE^JANE",
                "patient_id": "P-17",
                "study_date": "20240102",
                "modality": "CT",
                "rows": 512,
                "columns": 256,
                "bits_stored": 12
            },
            "window_center": 40.0,
            "window_width": 400.0,
            "min_value": -1000.0,
            "max_value": 3000.0
        });

        let parsed: DicomDecodeResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.success);
        let metadata = parsed.metadata.unwrap();
        assert_eq!(metadata.columns, 256);
        assert_eq!(metadata.rows, 512);
        assert_eq!(metadata.bits_stored, Some(12));
        assert_eq!(parsed.min_value, Some(-1000.0));
    }

    #[test]
    fn server_error_without_flag_is_a_failure() {
        let parsed: PlateDetectResponse =
            serde_json::from_value(json!({ "error": "Invalid file type" })).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error.as_deref(), Some("Invalid file type"));
    }

    #[test]
    fn missing_metadata_strings_default_to_unknown() {
        let parsed: StudyMetadata =
            serde_json::from_value(json!({ "rows": 1, "columns": 2 })).unwrap();
        assert_eq!(parsed.patient_name, "Unknown");
        assert_eq!(parsed.modality, "Unknown");
        assert_eq!(parsed.bits_stored, None);
    }

    #[test]
    fn adjust_request_serializes_exact_body() {
        let request = WindowAdjustRequest {
            image_data: "data:image/jpeg;base64,QUJD".to_string(),
            window_center: 100.0,
            window_width: 200.0,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "image_data": "data:image/jpeg;base64,QUJD",
                "window_center": 100.0,
                "window_width": 200.0
            })
        );
    }
}
