#[cfg(test)]
mod tests {
    use crate::core::OverlayConfig;

    #[test]
    fn test_default_config_matches_original_controller() {
        let config = OverlayConfig::default();
        assert_eq!(config.skip_increment_ms, 10_000);
        assert_eq!(config.auto_hide_timeout_ms, 3_000);
        assert!((config.brightness_floor - 0.01).abs() < f32::EPSILON);
        assert!((config.zone_fraction - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.max_volume_steps, 15);
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = OverlayConfig::default();
        config.skip_increment_ms = 5_000;
        config.zone_fraction = 0.25;
        config.demo_tone_enabled = true;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: OverlayConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.skip_increment_ms, 5_000);
        assert!((parsed.zone_fraction - 0.25).abs() < f32::EPSILON);
        assert!(parsed.demo_tone_enabled);
    }

    #[test]
    fn test_broken_config_fails_to_parse() {
        let result = serde_json::from_str::<OverlayConfig>("{\"skip_increment_ms\": \"oops\"}");
        assert!(result.is_err());
    }
}
