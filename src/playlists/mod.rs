//! Playlist models and Web API client.
//!
//! This module provides the serde models for Spotify's simplified
//! playlist objects and paging envelopes, plus [`PlaylistsClient`] for
//! fetching the current user's playlists page by page.
//!
//! The models carry only the fields a playlist manager consumes; unknown
//! fields in the provider's responses are ignored on deserialization.

mod client;

pub use client::{PlaylistsClient, PlaylistsError};

use serde::{Deserialize, Serialize};

/// An image attached to a playlist, in one of several sizes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Source URL of the image.
    pub url: String,
    /// Image height in pixels, when the provider reports one.
    #[serde(default)]
    pub height: Option<u32>,
    /// Image width in pixels, when the provider reports one.
    #[serde(default)]
    pub width: Option<u32>,
}

/// The user who owns a playlist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistOwner {
    /// The owner's Spotify user ID.
    pub id: String,
    /// The owner's display name, if public.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A link to a playlist's tracks, with the total count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TracksLink {
    /// Web API URL of the full track listing.
    pub href: String,
    /// Number of tracks in the playlist.
    pub total: u32,
}

/// Spotify's simplified playlist object.
///
/// This is the shape returned by the "current user's playlists" listing;
/// the full playlist object (with inline tracks) is not modeled here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    /// The playlist's Spotify ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owner-provided description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether other users can modify the playlist.
    #[serde(default)]
    pub collaborative: bool,
    /// Public visibility; `None` when not determinable.
    #[serde(default)]
    pub public: Option<bool>,
    /// Version identifier for concurrent-edit detection.
    #[serde(default)]
    pub snapshot_id: String,
    /// The playlist's Spotify URI.
    #[serde(default)]
    pub uri: String,
    /// Web API URL of the playlist.
    #[serde(default)]
    pub href: String,
    /// Owning user.
    #[serde(default)]
    pub owner: PlaylistOwner,
    /// Cover images, largest first.
    #[serde(default)]
    pub images: Vec<Image>,
    /// Link to the playlist's tracks.
    #[serde(default)]
    pub tracks: TracksLink,
}

/// Spotify's paging envelope.
///
/// Listing endpoints return results in pages; `next` and `previous` are
/// complete request URLs or `null` at either end of the sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Web API URL of this page.
    pub href: String,
    /// The items on this page.
    pub items: Vec<T>,
    /// Maximum number of items per page.
    pub limit: u32,
    /// Offset of the first item on this page.
    pub offset: u32,
    /// Total number of items across all pages.
    pub total: u32,
    /// URL of the next page, if there is one.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if there is one.
    #[serde(default)]
    pub previous: Option<String>,
}
