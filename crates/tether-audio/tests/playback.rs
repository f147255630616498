use std::path::PathBuf;

use tether_audio::{
    AudioError, MusicState, Repeat, halt_music, load_chunk, load_music, play_chunk, play_music,
    toggle_music,
};
use tether_test_utils::{MockPlatform, PlatformCall, mock_id};

fn platform() -> MockPlatform {
    let platform = MockPlatform::new();
    platform.add_sound("assets/beat.wav");
    platform.add_sound("assets/scratch.wav");
    platform
}

#[test]
fn test_load_and_release() {
    let platform = platform();
    let chunk = load_chunk(&platform, "assets/scratch.wav").unwrap();
    let music = load_music(&platform, "assets/beat.wav").unwrap();

    drop(chunk);
    drop(music);
    assert_eq!(platform.count_releases("chunk"), 1);
    assert_eq!(platform.count_releases("music"), 1);
}

#[test]
fn test_missing_file() {
    let platform = platform();
    let err = load_chunk(&platform, "assets/missing.wav").unwrap_err();

    assert_eq!(
        err,
        AudioError::ChunkLoad {
            path: PathBuf::from("assets/missing.wav"),
            message: "Couldn't open assets/missing.wav".to_string(),
        }
    );
    assert!(matches!(
        load_music(&platform, "assets/missing.wav"),
        Err(AudioError::MusicLoad { .. })
    ));
}

#[test]
fn test_play_chunk_on_first_free_channel() {
    let platform = platform();
    let chunk = load_chunk(&platform, "assets/scratch.wav").unwrap();
    let id = mock_id(&chunk).unwrap_or_default();

    assert_eq!(play_chunk(&platform, &chunk, Repeat::Once), Ok(0));
    assert_eq!(
        platform.calls().last(),
        Some(&PlatformCall::PlayChunk {
            chunk: id,
            channel: 0,
            repeat: Repeat::Once,
        })
    );
}

#[test]
fn test_playback_failure_carries_message() {
    let platform = platform();
    let chunk = load_chunk(&platform, "assets/scratch.wav").unwrap();
    platform.fail_playback(true);

    assert_eq!(
        play_chunk(&platform, &chunk, Repeat::Once),
        Err(AudioError::Playback {
            kind: "sound effect",
            message: "No free channels available".to_string(),
        })
    );
}

#[test]
fn test_play_empty_handle() {
    let platform = platform();
    let music = tether_audio::Music::<tether_test_utils::MockMusic>::empty();

    assert_eq!(
        play_music(&platform, &music, Repeat::Once),
        Err(AudioError::EmptyHandle { kind: "music" })
    );
}

#[test]
fn test_toggle_music_cycle() {
    let platform = platform();
    let music = load_music(&platform, "assets/beat.wav").unwrap();

    assert_eq!(toggle_music(&platform, &music), Ok(MusicState::Playing));
    assert_eq!(toggle_music(&platform, &music), Ok(MusicState::Paused));
    assert_eq!(toggle_music(&platform, &music), Ok(MusicState::Playing));

    halt_music(&platform);
    assert_eq!(
        tether_audio::AudioPlatform::music_state(&platform),
        MusicState::Stopped
    );

    let plays = platform
        .calls()
        .iter()
        .filter(|call| matches!(call, PlatformCall::PlayMusic { repeat: Repeat::Forever, .. }))
        .count();
    assert_eq!(plays, 1);
}
