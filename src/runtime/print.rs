//! Plain-text rendering of the feed.

use std::io::{self, Write};
use std::time::Duration;

use foryou::artwork::{ArtworkRef, ArtworkResolver};
use foryou::feed::Feed;
use foryou::library::{Library, Track, TrackId};
use foryou::nav::Route;

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn artwork_label(art: &ArtworkRef) -> String {
    match art {
        ArtworkRef::File(p) => p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ArtworkRef::Embedded(_) => "embedded".to_string(),
        ArtworkRef::Placeholder => "no art".to_string(),
    }
}

fn track_line(track: &Track) -> String {
    let mut line = track.title.clone();
    if let Some(artist) = &track.artist {
        line.push_str(" - ");
        line.push_str(artist);
    }
    if let Some(d) = track.duration {
        line.push_str(&format!(" [{}]", format_mmss(d)));
    }
    line
}

pub fn print_feed(
    out: &mut impl Write,
    feed: &Feed<'_>,
    artwork: &dyn ArtworkResolver,
) -> io::Result<()> {
    let Some(content) = feed.content() else {
        writeln!(out, "Damn, this is so empty!")?;
        return Ok(());
    };
    let library = content.library();

    writeln!(
        out,
        "[▶ Play all ({} tracks)]  [⤮ Shuffle play]",
        content.sorted.len()
    )?;

    writeln!(out, "\nRecently added")?;
    for (i, track) in content.carousel().iter().enumerate() {
        writeln!(
            out,
            "  {i}. {}  ({})",
            track_line(track),
            artwork_label(&artwork.track(track))
        )?;
    }

    for section in &content.sections {
        writeln!(out, "\n{}", section.kind.label())?;
        for row in section.rows(content.grid_columns()) {
            let cells: Vec<String> = row
                .iter()
                .map(|s| {
                    format!(
                        "{} ({})",
                        s.name(),
                        artwork_label(&s.artwork(library, artwork))
                    )
                })
                .collect();
            writeln!(out, "  {}", cells.join(" | "))?;
        }
    }
    Ok(())
}

fn print_tracks(out: &mut impl Write, library: &Library, ids: &[TrackId]) -> io::Result<()> {
    for track in library.resolve(ids) {
        writeln!(out, "  {}", track_line(track))?;
    }
    Ok(())
}

/// Print the detail screen a route leads to.
pub fn print_route(
    out: &mut impl Write,
    library: &Library,
    route: &Route,
    artwork: &dyn ArtworkResolver,
) -> io::Result<()> {
    writeln!(out, "\n→ {route}")?;
    match route {
        Route::Album(id) => {
            if let Some(album) = library.album(id) {
                writeln!(
                    out,
                    "{} by {} ({})",
                    album.name,
                    album.artist.as_deref().unwrap_or("Unknown artist"),
                    artwork_label(&artwork.album(library, album))
                )?;
                print_tracks(out, library, &album.tracks)?;
            }
        }
        Route::Artist(name) => {
            if let Some(artist) = library.artist(name) {
                writeln!(out, "{} ({} albums)", artist.name, artist.albums.len())?;
                print_tracks(out, library, &artist.tracks)?;
            }
        }
        Route::AlbumArtist(name) => {
            if let Some(a) = library.album_artist(name) {
                writeln!(out, "{} ({} albums)", a.name, a.albums.len())?;
                print_tracks(out, library, &a.tracks)?;
            }
        }
    }
    Ok(())
}
