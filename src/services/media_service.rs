use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::process::Command;

const DEFAULT_FPS: u32 = 24;
const DEFAULT_DURATION_PER_IMAGE: f32 = 3.0;
const DEFAULT_TRANSITION_DURATION: f32 = 0.5;

const FRAME_WIDTH: u32 = 1280;
const FRAME_HEIGHT: u32 = 720;

#[derive(Debug)]
pub enum MediaError {
    MissingInput(String),
    UnsupportedAnimation(String),
    Io(io::Error),
    FfmpegFailed(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::MissingInput(msg) => write!(f, "Missing input: {}", msg),
            MediaError::UnsupportedAnimation(value) => {
                write!(f, "Unsupported animation type: {}", value)
            }
            MediaError::Io(err) => write!(f, "I/O error: {}", err),
            MediaError::FfmpegFailed(msg) => write!(f, "ffmpeg failed: {}", msg),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<io::Error> for MediaError {
    fn from(err: io::Error) -> Self {
        MediaError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    None,
    Fade,
    Zoom,
    Slide,
}

impl Animation {
    pub fn parse(value: Option<&str>) -> Result<Self, MediaError> {
        match value {
            None | Some("none") => Ok(Animation::None),
            Some("fade") => Ok(Animation::Fade),
            Some("zoom") => Ok(Animation::Zoom),
            Some("slide") => Ok(Animation::Slide),
            Some(other) => Err(MediaError::UnsupportedAnimation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VideoOptions {
    pub fps: u32,
    pub duration_per_image: f32,
    pub transition_duration: f32,
    pub animation: Animation,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            duration_per_image: DEFAULT_DURATION_PER_IMAGE,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            animation: Animation::None,
        }
    }
}

/// Sequences still images (optionally with a looped audio bed) into an mp4 by
/// delegating to ffmpeg. All codec and container work stays in the external
/// tool; this service only validates inputs and assembles one invocation.
#[derive(Clone)]
pub struct MediaService {
    output_dir: PathBuf,
}

impl MediaService {
    pub fn new() -> Self {
        Self {
            output_dir: env::temp_dir(),
        }
    }

    pub async fn compose_video(
        &self,
        image_paths: &[String],
        audio_path: Option<&str>,
        options: &VideoOptions,
    ) -> Result<PathBuf, MediaError> {
        validate_media_files(image_paths, audio_path)?;

        let total_duration = image_paths.len() as f32 * options.duration_per_image;
        let stamp = Local::now().timestamp_millis();
        let output_path = self.output_dir.join(format!("travel_video_{}.mp4", stamp));

        let filtergraph = build_filtergraph(image_paths.len(), options);

        // Each image is a looped still held for its slot; the per-segment
        // animation and the crossing fades are applied in the filtergraph.
        let mut command = Command::new("ffmpeg");
        command.arg("-y");
        for path in image_paths {
            command.args(["-loop", "1"]);
            command.args(["-t", &options.duration_per_image.to_string()]);
            command.args(["-i", path]);
        }

        if let Some(audio) = audio_path {
            // Loop the audio bed; -t below trims it back to the video length.
            command.args(["-stream_loop", "-1", "-i", audio]);
        }

        command.args(["-filter_complex", &filtergraph]);
        command.args(["-map", "[vout]"]);

        if audio_path.is_some() {
            command.args(["-map", &format!("{}:a", image_paths.len())]);
            command.args(["-c:a", "aac"]);
        }

        command
            .args(["-c:v", "libx264"])
            .args(["-t", &total_duration.to_string()])
            .arg(&output_path);

        let output = command.output().await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                MediaError::FfmpegFailed("ffmpeg executable not found on PATH".to_string())
            } else {
                MediaError::Io(err)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
            return Err(MediaError::FfmpegFailed(
                tail.into_iter().rev().collect::<Vec<_>>().join("\n"),
            ));
        }

        Ok(output_path)
    }
}

impl Default for MediaService {
    fn default() -> Self {
        Self::new()
    }
}

/// One chain per image, then a concat of the animated segments.
///
/// Interior segment edges always cross-fade so cuts never pop; the `fade`
/// animation adds the fades at the outer edges too. `zoom` grows the frame by
/// 5% per second, `slide` moves the image in from the left over the full slot.
fn build_filtergraph(image_count: usize, options: &VideoOptions) -> String {
    let dur = options.duration_per_image;
    let fps = options.fps;
    let fade = options.transition_duration.min(dur / 2.0);
    let (w, h) = (FRAME_WIDTH, FRAME_HEIGHT);

    let mut graph = String::new();
    for i in 0..image_count {
        let mut fades = String::new();
        if i > 0 || options.animation == Animation::Fade {
            fades.push_str(&format!(",fade=t=in:st=0:d={}", fade));
        }
        if i + 1 < image_count || options.animation == Animation::Fade {
            fades.push_str(&format!(
                ",fade=t=out:st={}:d={}",
                (dur - fade).max(0.0),
                fade
            ));
        }

        let base = format!(
            "[{i}:v]scale={w}:{h}:force_original_aspect_ratio=decrease,\
             pad={w}:{h}:(ow-iw)/2:(oh-ih)/2,setsar=1,fps={fps}"
        );

        match options.animation {
            Animation::Zoom => {
                let frames = (dur * fps as f32).round().max(1.0) as u32;
                graph.push_str(&format!(
                    "{base},zoompan=z='1+0.05*on/{fps}':d={frames}:s={w}x{h}:fps={fps}{fades},format=yuv420p[v{i}];"
                ));
            }
            Animation::Slide => {
                graph.push_str(&format!(
                    "{base}[s{i}];\
                     color=c=black:s={w}x{h}:d={dur}:r={fps}[b{i}];\
                     [b{i}][s{i}]overlay=x='-W*(1-t/{dur})':y=0{fades},format=yuv420p[v{i}];"
                ));
            }
            Animation::None | Animation::Fade => {
                graph.push_str(&format!("{base}{fades},format=yuv420p[v{i}];"));
            }
        }
    }

    for i in 0..image_count {
        graph.push_str(&format!("[v{}]", i));
    }
    graph.push_str(&format!("concat=n={}:v=1:a=0[vout]", image_count));
    graph
}

/// Every referenced media file must exist before any work starts.
pub fn validate_media_files(
    image_paths: &[String],
    audio_path: Option<&str>,
) -> Result<(), MediaError> {
    if image_paths.is_empty() {
        return Err(MediaError::MissingInput("no images provided".to_string()));
    }

    for path in image_paths {
        if !Path::new(path).is_file() {
            return Err(MediaError::MissingInput(format!("image not found: {}", path)));
        }
    }

    if let Some(audio) = audio_path {
        if !Path::new(audio).is_file() {
            return Err(MediaError::MissingInput(format!(
                "audio file not found: {}",
                audio
            )));
        }
    }

    Ok(())
}
