use std::env;
use std::fs;

use sfxkit::Result;
use sfxkit::reader::SfxReader;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let root = env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let mut sfx = SfxReader::new(root);
    sfx.load()?;

    let sound = sfx.sound_effect("SPC_GA", 209, 48)?;
    println!(
        "{} Hz, {} bytes, loop {}",
        sound.sample_rate,
        sound.sound_data.len(),
        sound.loop_offset
    );
    fs::write("sound.wav", sound.to_wav())?;

    let track = sfx.stream_track("BEATS", 1)?;
    println!("track 1: {} beats, {} bytes of ogg", track.beats.len(), track.audio_data.len());
    fs::write("track.ogg", &track.audio_data)?;

    Ok(())
}
