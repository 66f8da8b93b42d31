use serde::{Deserialize, Serialize};

/// A transcript segment (sentence/phrase) with timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Complete transcription result.
///
/// Deserialized from the service's verbose JSON response. Extra fields the
/// service sends (segment ids, token lists, log-probabilities) are ignored;
/// a response without a `segments` array deserializes with an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Format as WebVTT subtitles.
    ///
    /// A `WEBVTT` header line, then one cue per segment, each preceded by a
    /// blank line. Segment text is written as-is, with no trimming or
    /// wrapping. No segments yields just the header.
    pub fn to_vtt(&self) -> String {
        let mut out = String::from("WEBVTT\n");
        for seg in &self.segments {
            out.push('\n');
            out.push_str(&format!(
                "{} --> {}\n",
                format_vtt_time(seg.start),
                format_vtt_time(seg.end)
            ));
            out.push_str(&seg.text);
            out.push('\n');
        }
        out
    }

    /// Format as SRT subtitles.
    ///
    /// One block per segment: the 1-based index, the time range with comma
    /// decimal separators, then the text as-is. Blocks are separated by
    /// blank lines. No segments yields an empty string.
    pub fn to_srt(&self) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", i + 1));
            out.push_str(&format!(
                "{} --> {}\n",
                format_srt_time(seg.start),
                format_srt_time(seg.end)
            ));
            out.push_str(&seg.text);
            out.push('\n');
        }
        out
    }
}

/// Format seconds as VTT timestamp: HH:MM:SS.mmm
///
/// Each field is floored; the sub-millisecond remainder is truncated, never
/// rounded up, so 12.9996 renders as 00:00:12.999. Hours are not clamped
/// and widen past two digits as needed.
fn format_vtt_time(seconds: f64) -> String {
    let h = (seconds / 3600.0).floor() as u64;
    let rem = seconds % 3600.0;
    let m = (rem / 60.0).floor() as u64;
    let s = (rem % 60.0).floor() as u64;
    let ms = ((seconds - seconds.floor()) * 1000.0).floor() as u64;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Format seconds as SRT timestamp: HH:MM:SS,mmm
fn format_srt_time(seconds: f64) -> String {
    let h = (seconds / 3600.0).floor() as u64;
    let rem = seconds % 3600.0;
    let m = (rem / 60.0).floor() as u64;
    let s = (rem % 60.0).floor() as u64;
    let ms = ((seconds - seconds.floor()) * 1000.0).floor() as u64;
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
        }
    }

    fn transcript(segments: Vec<Segment>) -> Transcript {
        Transcript {
            text: String::new(),
            segments,
        }
    }

    #[test]
    fn test_vtt_time_zero() {
        assert_eq!(format_vtt_time(0.0), "00:00:00.000");
    }

    #[test]
    fn test_srt_time_zero() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
    }

    #[test]
    fn test_time_fields_zero_padded() {
        assert_eq!(format_vtt_time(3725.25), "01:02:05.250");
        assert_eq!(format_srt_time(65.75), "00:01:05,750");
    }

    #[test]
    fn test_millis_truncated_not_rounded() {
        assert_eq!(format_vtt_time(12.9996), "00:00:12.999");
        assert_eq!(format_vtt_time(3661.9996), "01:01:01.999");
        assert_eq!(format_srt_time(3661.9996), "01:01:01,999");
    }

    #[test]
    fn test_hours_widen_past_two_digits() {
        assert_eq!(format_vtt_time(360000.5), "100:00:00.500");
    }

    #[test]
    fn test_vtt_empty_is_header_only() {
        assert_eq!(transcript(vec![]).to_vtt(), "WEBVTT\n");
    }

    #[test]
    fn test_srt_empty_is_empty() {
        assert_eq!(transcript(vec![]).to_srt(), "");
    }

    #[test]
    fn test_vtt_single_segment() {
        let t = transcript(vec![seg(0.0, 1.5, "hello world")]);
        assert_eq!(
            t.to_vtt(),
            "WEBVTT\n\n00:00:00.000 --> 00:00:01.500\nhello world\n"
        );
    }

    #[test]
    fn test_srt_single_segment() {
        let t = transcript(vec![seg(0.0, 1.5, "hello world")]);
        assert_eq!(t.to_srt(), "1\n00:00:00,000 --> 00:00:01,500\nhello world\n");
    }

    #[test]
    fn test_vtt_multiple_segments() {
        let t = transcript(vec![seg(0.0, 1.5, " First."), seg(1.5, 3.25, " Second.")]);
        assert_eq!(
            t.to_vtt(),
            "WEBVTT\n\
             \n\
             00:00:00.000 --> 00:00:01.500\n\
             \x20First.\n\
             \n\
             00:00:01.500 --> 00:00:03.250\n\
             \x20Second.\n"
        );
    }

    #[test]
    fn test_srt_indices_follow_input_order() {
        let t = transcript(vec![seg(10.0, 12.0, "late"), seg(0.0, 2.0, "early")]);
        assert_eq!(
            t.to_srt(),
            "1\n00:00:10,000 --> 00:00:12,000\nlate\n\
             \n\
             2\n00:00:00,000 --> 00:00:02,000\nearly\n"
        );
    }

    #[test]
    fn test_segment_text_not_trimmed() {
        let t = transcript(vec![seg(0.0, 1.0, " leading and trailing ")]);
        assert!(t.to_vtt().contains("\n leading and trailing \n"));
        assert!(t.to_srt().contains("\n leading and trailing \n"));
    }

    #[test]
    fn test_zero_width_segment_still_rendered() {
        let t = transcript(vec![seg(0.0, 0.0, "blip")]);
        assert!(t.to_vtt().contains("00:00:00.000 --> 00:00:00.000\nblip\n"));
        assert_eq!(t.to_srt(), "1\n00:00:00,000 --> 00:00:00,000\nblip\n");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let t = transcript(vec![seg(0.0, 1.5, "a"), seg(1.5, 3.25, "b")]);
        assert_eq!(t.to_vtt(), t.to_vtt());
        assert_eq!(t.to_srt(), t.to_srt());
    }

    #[test]
    fn test_deserialize_verbose_response() {
        let payload = r#"{
            "task": "transcribe",
            "language": "English",
            "duration": 3.2,
            "text": "Hello there.",
            "segments": [
                {
                    "id": 0,
                    "seek": 0,
                    "start": 0.0,
                    "end": 3.2,
                    "text": " Hello there.",
                    "tokens": [50364, 2425, 456, 13],
                    "temperature": 0.0,
                    "avg_logprob": -0.28,
                    "compression_ratio": 0.85,
                    "no_speech_prob": 0.01
                }
            ],
            "x_groq": {"id": "req_01abc"}
        }"#;

        let t: Transcript = serde_json::from_str(payload).unwrap();
        assert_eq!(t.text, "Hello there.");
        assert_eq!(t.segments.len(), 1);
        assert_eq!(t.segments[0].text, " Hello there.");
        assert_eq!(t.segments[0].start, 0.0);
        assert_eq!(t.segments[0].end, 3.2);
    }

    #[test]
    fn test_deserialize_without_segments() {
        let t: Transcript = serde_json::from_str(r#"{"text": "short clip"}"#).unwrap();
        assert_eq!(t.text, "short clip");
        assert!(t.segments.is_empty());
    }
}
