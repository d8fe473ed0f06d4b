use heapless::String;
use minmins_common::*;

use crate::services::settings_service::SettingsService;

/// What a companion message changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InboxOutcome {
    pub weather_updated: bool,
    pub background: Option<BackgroundColor>,
}

impl InboxOutcome {
    pub fn is_noop(&self) -> bool {
        !self.weather_updated && self.background.is_none()
    }
}

/// Applies settings and weather messages from the companion.
pub struct ProtocolService {
    weather: Option<WeatherSnapshot>,
    weather_text: String<WEATHER_TEXT_LEN>,
}

impl ProtocolService {
    pub fn new(placeholder: &str) -> Self {
        Self {
            weather: None,
            weather_text: truncated(placeholder),
        }
    }

    pub async fn on_message<S: SettingsStorage>(
        &mut self,
        message: &AppMessage<'_>,
        settings: &mut SettingsService<S>,
    ) -> InboxOutcome {
        let mut outcome = InboxOutcome::default();

        let temperature = message
            .find(message_keys::TEMPERATURE)
            .and_then(|v| v.as_i32());
        let conditions = message
            .find(message_keys::CONDITIONS)
            .and_then(|v| v.as_str());

        match (temperature, conditions) {
            (Some(degrees), Some(conditions)) => {
                let snapshot = WeatherSnapshot::new(degrees, conditions);
                self.weather_text = snapshot.text();
                info!("Weather updated: {}", self.weather_text.as_str());
                self.weather = Some(snapshot);
                outcome.weather_updated = true;
            }
            (None, None) => {}
            _ => debug!("Partial weather message ignored"),
        }

        if let Some(raw) = message
            .find(message_keys::BACKGROUND_COLOR)
            .and_then(|v| v.as_i32())
        {
            let color = BackgroundColor::from_wire(raw);
            // applied in memory even if persisting fails
            if let Err(e) = settings.store(color).await {
                warn!("Background {:#x} applied but not persisted: {:?}", color.raw(), e);
            }
            outcome.background = Some(color);
        }

        outcome
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn weather_text(&self) -> &str {
        &self.weather_text
    }
}
