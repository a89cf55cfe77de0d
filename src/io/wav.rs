//! WAV export of the demo's audio clips.

use std::path::{Path, PathBuf};

use super::AudioClip;
use crate::error::Result;
use crate::pipeline::DemoFrame;

/// Write `clip` as a mono 32-bit float WAV file.
pub fn write_clip(path: &Path, clip: &AudioClip) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: clip.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &clip.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write both clips of `frame` into `dir`: `reference.wav` and
/// `sampled_<Fs>hz.wav`. Returns the paths written, reference first.
pub fn export_frame(dir: &Path, frame: &DemoFrame) -> Result<[PathBuf; 2]> {
    std::fs::create_dir_all(dir)?;

    let reference_path = dir.join("reference.wav");
    let sampled_path = dir.join(format!("sampled_{}hz.wav", frame.sampling_rate.hz()));

    write_clip(&reference_path, &frame.reference_clip())?;
    write_clip(&sampled_path, &frame.sampled_clip())?;

    log::info!(
        "exported {} and {}",
        reference_path.display(),
        sampled_path.display()
    );
    Ok([reference_path, sampled_path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{SamplingDemo, SamplingRate};

    #[test]
    fn test_write_clip_roundtrips_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let clip = AudioClip {
            sample_rate: 440,
            samples: vec![0.0, 0.5, -0.5, 1.0],
        };
        write_clip(&path, &clip).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 440);
        assert_eq!(spec.channels, 1);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn test_export_frame_names_files_by_rate() {
        let dir = tempfile::tempdir().unwrap();
        let frame = SamplingDemo::default().run(SamplingRate::new(650).unwrap());
        let [reference, sampled] = export_frame(dir.path(), &frame).unwrap();

        assert!(reference.ends_with("reference.wav"));
        assert!(sampled.ends_with("sampled_650hz.wav"));

        let sampled_reader = hound::WavReader::open(&sampled).unwrap();
        assert_eq!(sampled_reader.spec().sample_rate, 650);
        assert_eq!(sampled_reader.len(), 130);

        let reference_reader = hound::WavReader::open(&reference).unwrap();
        assert_eq!(reference_reader.spec().sample_rate, 4000);
        assert_eq!(reference_reader.len(), 800);
    }
}
