#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::{Alert, AudioEvent};
    use crate::level::{EnemySpawn, LevelConfig, LevelLoadError};
    use crate::state::GameStateSnapshot;
    use crate::types::Velocity;

    /// Verify enemy colors use the lowercase wire names.
    #[test]
    fn test_enemy_color_serde() {
        assert_eq!(serde_json::to_string(&EnemyColor::Red).unwrap(), "\"red\"");
        assert_eq!(
            serde_json::to_string(&EnemyColor::Green).unwrap(),
            "\"green\""
        );
        assert_eq!(serde_json::to_string(&EnemyColor::Blue).unwrap(), "\"blue\"");

        let back: EnemyColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, EnemyColor::Blue);
    }

    #[test]
    fn test_game_mode_serde() {
        for v in [GameMode::Normal, GameMode::Hard] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::Won,
            GamePhase::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame {
                mode: GameMode::Hard,
            },
            PlayerCommand::ClickEnemy { enemy_id: 7 },
            PlayerCommand::TogglePause,
            PlayerCommand::UseBooster,
            PlayerCommand::NextLevel,
            PlayerCommand::Retry,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::BackgroundStart,
            AudioEvent::BackgroundStop,
            AudioEvent::Kill,
            AudioEvent::Win,
            AudioEvent::Lost,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Critical,
            message: "level 4 failed to load".to_string(),
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.level, back.level);
    }

    /// Verify the level wire format: camelCase keys, lowercase colors,
    /// optional color field.
    #[test]
    fn test_level_config_wire_format() {
        let json = r#"{
            "enemies": [
                { "x": 100.0, "y": 200.0, "speed": 150.0, "color": "red" },
                { "x": 400.0, "y": 300.0, "speed": 120.0 }
            ],
            "timeLimit": 60.0
        }"#;

        let config = LevelConfig::from_json(json).unwrap();
        assert_eq!(config.enemies.len(), 2);
        assert_eq!(config.time_limit, 60.0);
        assert_eq!(config.enemies[0].color, Some(EnemyColor::Red));
        assert_eq!(config.enemies[1].color, None);
        assert_eq!(config.enemies[1].speed, 120.0);
    }

    #[test]
    fn test_level_config_round_trip() {
        let config = LevelConfig {
            enemies: vec![EnemySpawn {
                x: 10.0,
                y: 20.0,
                speed: 90.0,
                color: Some(EnemyColor::Blue),
            }],
            time_limit: 45.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(
            json.contains("\"timeLimit\""),
            "Wire format should be camelCase: {json}"
        );
        let back = LevelConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_level_config_malformed_is_error() {
        let err = LevelConfig::from_json("{ \"enemies\": 3 }").unwrap_err();
        let wrapped = LevelLoadError::from(err);
        assert!(wrapped.to_string().contains("malformed level data"));
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(snapshot.level, back.level);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Velocity direction/magnitude helpers.
    #[test]
    fn test_velocity_from_angle_preserves_speed() {
        for angle in [0.0, 1.0, 2.5, std::f64::consts::PI, 5.9] {
            let v = Velocity::from_angle(angle, 140.0);
            assert!(
                (v.speed() - 140.0).abs() < 1e-9,
                "Speed should be 140 at angle {angle}, got {}",
                v.speed()
            );
        }
    }

    #[test]
    fn test_velocity_from_angle_direction() {
        let right = Velocity::from_angle(0.0, 100.0);
        assert!((right.x - 100.0).abs() < 1e-9);
        assert!(right.y.abs() < 1e-9);

        let up = Velocity::from_angle(std::f64::consts::FRAC_PI_2, 100.0);
        assert!(up.x.abs() < 1e-9);
        assert!((up.y - 100.0).abs() < 1e-9);
    }
}
