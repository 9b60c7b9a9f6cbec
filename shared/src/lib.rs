use serde::{Deserialize, Serialize};

/// A single line segment of a stroke, with endpoints expressed as fractions
/// of the sender's canvas width/height at capture time. Receivers scale by
/// their own canvas dimensions, so differing aspect ratios distort the
/// geometry; that is accepted behavior, not corrected anywhere.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub color: String,
    pub thickness: f32,
}

/// Wire messages, identical shape in both directions. The tag field maps to
/// the event name on the wire: `{"type":"drawing","x0":...,...}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum WireMessage {
    #[serde(rename = "drawing")]
    Drawing(Segment),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_wire_shape() {
        let message = WireMessage::Drawing(Segment {
            x0: 0.5,
            y0: 0.5,
            x1: 1.0,
            y1: 1.0,
            color: "#000000".to_string(),
            thickness: 5.0,
        });
        let json: serde_json::Value =
            serde_json::to_value(&message).expect("serialize wire message");
        assert_eq!(json["type"], "drawing");
        assert_eq!(json["x0"], 0.5);
        assert_eq!(json["y0"], 0.5);
        assert_eq!(json["x1"], 1.0);
        assert_eq!(json["y1"], 1.0);
        assert_eq!(json["color"], "#000000");
        assert_eq!(json["thickness"], 5.0);
    }

    #[test]
    fn drawing_round_trip() {
        let message = WireMessage::Drawing(Segment {
            x0: 0.25,
            y0: 0.75,
            x1: 0.5,
            y1: 1.0,
            color: "#e46b49".to_string(),
            thickness: 12.0,
        });
        let text = serde_json::to_string(&message).expect("serialize");
        let parsed: WireMessage = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(parsed, message);
    }
}
