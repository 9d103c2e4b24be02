// File: crates/grid-core/src/channel.rs
// Summary: Per-channel gap policy (interpolate vs. null passthrough).

/// How synthetic grid rows fill a channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    /// Linear value between the two neighbouring real samples.
    Interpolate,
    /// Leave the value absent so the renderer decides how to draw the gap.
    #[default]
    Passthrough,
}

impl ChannelMode {
    pub fn interpolates(self) -> bool {
        matches!(self, ChannelMode::Interpolate)
    }
}

/// Ordered set of channels carried into the output.
///
/// Output rows hold exactly these channels, in declaration order. Declaring a
/// name twice keeps the first position and the last mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelConfig {
    channels: Vec<(String, ChannelMode)>,
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single channel named `y`.
    pub fn y(mode: ChannelMode) -> Self {
        Self::new().with_channel("y", mode)
    }

    pub fn with_channel(mut self, name: impl Into<String>, mode: ChannelMode) -> Self {
        self.set(name, mode);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, mode: ChannelMode) {
        let name = name.into();
        match self.channels.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = mode,
            None => self.channels.push((name, mode)),
        }
    }

    pub fn mode(&self, name: &str) -> Option<ChannelMode> {
        self.channels.iter().find(|(n, _)| n == name).map(|&(_, m)| m)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChannelMode)> {
        self.channels.iter().map(|(n, m)| (n.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
