//! Navigation seam: detail routes the feed can open.

use std::fmt;

use log::info;

use crate::library::AlbumId;

/// A detail screen reachable from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Album(AlbumId),
    Artist(String),
    AlbumArtist(String),
}

impl Route {
    /// Route path, with the identifier percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Album(id) => format!("album/{}", urlencoding::encode(id.as_str())),
            Self::Artist(name) => format!("artist/{}", urlencoding::encode(name)),
            Self::AlbumArtist(name) => format!("album_artist/{}", urlencoding::encode(name)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// A navigator that only records where it was sent.
#[derive(Debug, Default)]
pub struct RouteHistory {
    routes: Vec<Route>,
}

impl RouteHistory {
    pub fn current(&self) -> Option<&Route> {
        self.routes.last()
    }

    /// Pop the current route, returning it.
    pub fn back(&mut self) -> Option<Route> {
        self.routes.pop()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Navigator for RouteHistory {
    fn navigate(&mut self, route: Route) {
        info!("navigating to {route}");
        self.routes.push(route);
    }
}
