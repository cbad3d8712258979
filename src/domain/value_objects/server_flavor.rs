//! ServerFlavor value object - which server distribution a container runs

use serde::{Deserialize, Serialize};

/// Server distribution baked into a service's container
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ServerFlavor {
    /// PaperMC (default)
    #[default]
    Paper,
    /// Purpur (Paper fork)
    Purpur,
    /// Spigot
    Spigot,
    /// Mojang vanilla server
    Vanilla,
    /// Fabric loader
    Fabric,
    /// Forge loader
    Forge,
    /// Velocity proxy
    Velocity,
    /// BungeeCord proxy
    #[serde(alias = "bungee")]
    Bungeecord,
    /// Waterfall proxy
    Waterfall,
}

impl ServerFlavor {
    pub const ALL: [ServerFlavor; 9] = [
        ServerFlavor::Paper,
        ServerFlavor::Purpur,
        ServerFlavor::Spigot,
        ServerFlavor::Vanilla,
        ServerFlavor::Fabric,
        ServerFlavor::Forge,
        ServerFlavor::Velocity,
        ServerFlavor::Bungeecord,
        ServerFlavor::Waterfall,
    ];

    /// Proxies sit in front of the game servers and take no `nogui` argument
    pub fn is_proxy(&self) -> bool {
        matches!(
            self,
            ServerFlavor::Velocity | ServerFlavor::Bungeecord | ServerFlavor::Waterfall
        )
    }

    /// Tag stored in the document (`type` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerFlavor::Paper => "paper",
            ServerFlavor::Purpur => "purpur",
            ServerFlavor::Spigot => "spigot",
            ServerFlavor::Vanilla => "vanilla",
            ServerFlavor::Fabric => "fabric",
            ServerFlavor::Forge => "forge",
            ServerFlavor::Velocity => "velocity",
            ServerFlavor::Bungeecord => "bungeecord",
            ServerFlavor::Waterfall => "waterfall",
        }
    }

    /// Port the server listens on inside the container
    pub fn default_port(&self) -> u16 {
        if self.is_proxy() {
            25577
        } else {
            25565
        }
    }
}

impl std::fmt::Display for ServerFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
