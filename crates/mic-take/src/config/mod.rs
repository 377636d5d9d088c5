mod audio_config;
mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod output_config;

pub(crate) use {
    audio_config::AudioConfig, behaviour_config::BehaviourConfig, config::Config,
    output_config::OutputConfig,
};

pub(crate) const DEFAULT_DESKTOP_NOTIFICATIONS: bool = true;

pub(crate) fn default_desktop_notifications() -> bool {
    DEFAULT_DESKTOP_NOTIFICATIONS
}
