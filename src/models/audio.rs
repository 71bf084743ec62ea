//! Output audio synthesis configuration.

use serde::{Deserialize, Serialize};

/// Instructs the speech synthesizer how to generate output audio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputAudioConfig {
    /// Encoding of the synthesized audio content.
    pub audio_encoding: OutputAudioEncoding,
    /// Synthesis sample rate in hertz. The synthesizer resamples if this
    /// differs from the voice's natural rate.
    pub sample_rate_hertz: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesize_speech_config: Option<SynthesizeSpeechConfig>,
}

/// Audio encoding of the output audio format in text-to-speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputAudioEncoding {
    #[serde(rename = "OUTPUT_AUDIO_ENCODING_UNSPECIFIED")]
    Unspecified,
    /// Uncompressed 16-bit signed little-endian samples, with a WAV header.
    #[serde(rename = "OUTPUT_AUDIO_ENCODING_LINEAR_16")]
    Linear16,
    /// MP3 audio at 32kbps.
    #[serde(rename = "OUTPUT_AUDIO_ENCODING_MP3")]
    Mp3,
    /// Opus audio in an ogg container.
    #[serde(rename = "OUTPUT_AUDIO_ENCODING_OGG_OPUS")]
    OggOpus,
}

/// Configuration of how speech should be synthesized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechConfig {
    /// Speaking rate in `[0.25, 4.0]`; 1.0 is the voice's native speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_rate: Option<f64>,
    /// Speaking pitch in semitones, `[-20.0, 20.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    /// Volume gain in dB relative to the voice's native volume,
    /// `[-96.0, 16.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_gain_db: Option<f64>,
    /// Audio-effects profiles applied on top of each other, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects_profile_id: Option<Vec<String>>,
    /// The desired voice of the synthesized audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceSelectionParams>,
}

/// Voice selection preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    /// Voice name; when unset, a voice is chosen from the other parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Preferred voice gender. A preference, not a requirement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml_gender: Option<SsmlVoiceGender>,
}

/// Voice gender as described in the SSML voice element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SsmlVoiceGender {
    #[serde(rename = "SSML_VOICE_GENDER_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "SSML_VOICE_GENDER_MALE")]
    Male,
    #[serde(rename = "SSML_VOICE_GENDER_FEMALE")]
    Female,
    #[serde(rename = "SSML_VOICE_GENDER_NEUTRAL")]
    Neutral,
}
