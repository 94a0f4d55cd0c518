use super::enviro_model::{AirQuality, AqiLevel, Weather};

/// Advisory tips derived from current conditions. Rules are additive:
/// several can fire on one snapshot, and clear mild days yield none
/// beyond the outdoor-activity suggestion.
pub fn advisory_tips(air_quality: &AirQuality, weather: &Weather) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();
    let mut push = |text: &str| tips.push(text.to_string());

    if matches!(
        air_quality.level,
        AqiLevel::Unhealthy | AqiLevel::VeryUnhealthy | AqiLevel::Hazardous
    ) {
        push("Air quality is poor. Consider staying indoors or wearing a mask if going outside.");
        push("Avoid outdoor exercise until air quality improves.");
    }

    if weather.temperature > 25 {
        push("Hot weather detected. Use fans instead of AC when possible to save energy.");
        push("Consider walking or biking for short trips in this nice weather!");
    }

    if weather.condition == "Rainy" {
        push("Rainy day! Perfect for collecting rainwater for your plants.");
        push("Use public transit or carpool to avoid driving in wet conditions.");
    }

    if air_quality.level == AqiLevel::Good
        && weather.temperature > 15
        && weather.temperature < 25
    {
        push("Perfect weather! Great day for outdoor activities like planting trees or cleanup.");
    }

    if weather.uv_index.map_or(false, |uv| uv > 7) {
        push("High UV index. Use natural shade instead of energy-consuming AC when possible.");
    }

    tips
}

// ============== Tests ==============

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enviro::aqi_level;

    fn air(aqi: u32) -> AirQuality {
        AirQuality {
            aqi,
            level: aqi_level(aqi),
            pm25: 10,
            pm10: 20,
            o3: None,
            no2: None,
            co: None,
        }
    }

    fn weather(temperature: i32, condition: &str, uv_index: Option<u32>) -> Weather {
        Weather {
            temperature,
            condition: condition.to_string(),
            humidity: 50,
            wind_speed: 10,
            uv_index,
        }
    }

    #[test]
    fn poor_air_warns_to_stay_indoors() {
        let tips = advisory_tips(&air(160), &weather(20, "Sunny", None));
        assert!(tips[0].contains("Air quality is poor"));
        assert!(tips[1].contains("Avoid outdoor exercise"));
    }

    #[test]
    fn hazardous_air_also_warns() {
        let tips = advisory_tips(&air(250), &weather(20, "Sunny", None));
        assert!(tips.iter().any(|t| t.contains("Air quality is poor")));
    }

    #[test]
    fn perfect_day_suggests_outdoor_activity() {
        let tips = advisory_tips(&air(40), &weather(20, "Sunny", None));
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("Perfect weather"));
    }

    #[test]
    fn hot_day_disqualifies_perfect_weather() {
        let tips = advisory_tips(&air(40), &weather(30, "Sunny", None));
        assert!(tips.iter().any(|t| t.contains("Hot weather")));
        assert!(!tips.iter().any(|t| t.contains("Perfect weather")));
    }

    #[test]
    fn rain_and_high_uv_stack() {
        let tips = advisory_tips(&air(80), &weather(28, "Rainy", Some(9)));
        assert!(tips.iter().any(|t| t.contains("Rainy day")));
        assert!(tips.iter().any(|t| t.contains("High UV index")));
        assert!(tips.iter().any(|t| t.contains("Hot weather")));
    }

    #[test]
    fn mild_moderate_day_has_no_tips() {
        let tips = advisory_tips(&air(80), &weather(18, "Cloudy", Some(4)));
        assert!(tips.is_empty());
    }
}
