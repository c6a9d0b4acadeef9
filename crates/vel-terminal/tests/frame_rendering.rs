//! Whole-frame rendering and run-loop tests.
//!
//! Frames are drawn into a `CellBuffer` and checked as plain text and cell
//! styles; the run loop is driven through `TestableBackend` with scripted
//! events.

use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::time::Duration;
use vel_core::content::FAQ;
use vel_core::{Archive, FixedClock, Periods, Section};
use vel_terminal::{
    AppConfig, CellBuffer, ColorMode, GenericTerminal, Layout, TestableBackend, Theme, VelApp,
};

fn app() -> VelApp<Pcg64, FixedClock> {
    let clock = FixedClock::new(
        NaiveDate::from_ymd_opt(2025, 10, 22)
            .unwrap()
            .and_hms_opt(2, 56, 0)
            .unwrap(),
    );
    let archive = Archive::with_parts(Periods::default(), Pcg64::seed_from_u64(42), clock);
    let config = AppConfig {
        color_mode: Some(ColorMode::TrueColor),
        ..AppConfig::default()
    };
    VelApp::new(archive, config)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_active_sidebar_item_highlighted() {
    let theme = Theme::default();
    let layout = Layout::new(100, 30);
    for section in Section::ALL {
        let mut app = app();
        app.archive_mut().select_section(section);
        let mut buffer = CellBuffer::new(100, 30);
        app.render(&mut buffer);

        for other in Section::ALL {
            let rect = layout.nav_rect(other);
            let cell = buffer.get(rect.x + 2, rect.y).unwrap();
            assert_eq!(
                cell.style.bg == theme.tint(theme.accent),
                other == section,
                "{other} while {section} is active"
            );
        }
    }
}

#[test]
fn test_console_shows_most_recent_entries() {
    let mut app = app();
    app.archive_mut().mount();
    app.advance(Duration::from_secs(24));
    assert_eq!(app.archive().entries().len(), 38);

    // Wide enough that no generated message wraps.
    let text = app.render_text(200, 30);
    let newest = app.archive().entries().last().unwrap();
    assert!(text.contains(&newest.message), "{text}");
    assert!(text.contains(&format!("[{}]", newest.timestamp)));
    // The oldest seeded line has scrolled out of a 30-row terminal.
    assert!(!text.contains("VEL initialization sequence started..."));
}

#[test]
fn test_generated_entry_uses_clock_timestamp() {
    let mut app = app();
    app.archive_mut().tick();
    let text = app.render_text(120, 30);
    assert!(text.contains("[2025-10-22 02:56:00]"));
}

#[test]
fn test_expanded_faq_answer_visible() {
    let mut app = app();
    app.archive_mut().select_section(Section::Faq);
    let collapsed = app.render_text(100, 40);
    for entry in &FAQ {
        assert!(collapsed.contains(entry.question), "{}", entry.question);
    }
    assert!(!collapsed.contains("He does not trade"));

    app.archive_mut().toggle_faq(1);
    let expanded = app.render_text(100, 40);
    assert!(expanded.contains("He does not trade"));
    assert!(expanded.contains("▲"));

    // Opening another closes the first.
    app.archive_mut().toggle_faq(2);
    let swapped = app.render_text(100, 40);
    assert!(!swapped.contains("He does not trade"));
    assert!(swapped.contains("context is discarded"));
}

#[test]
fn test_cursor_blink_toggles_glyph() {
    let mut app = app();
    let visible = app.render_text(100, 30);
    assert!(visible.contains("> █"));

    app.archive_mut().cursor_blink();
    let hidden = app.render_text(100, 30);
    assert!(!hidden.contains('█'));
}

#[test]
fn test_stats_drift_reaches_screen() {
    let mut app = app();
    app.archive_mut().mount();
    app.advance(Duration::from_secs(5));
    let stats = *app.archive().stats();
    assert_ne!(stats.active_threads, 7);
    let text = app.render_text(100, 30);
    assert!(text.contains(&stats.threads_label()));
    assert!(text.contains(&stats.fragments_label()));
    assert!(text.contains(&stats.integrity_label()));
}

#[test]
fn test_run_loop_restores_terminal() {
    let mut app = app();
    let backend = TestableBackend::new(Vec::new(), 100, 30)
        .with_polls(vec![true, true, true])
        .with_events(vec![
            key(KeyCode::Char('1')),
            Event::Resize(90, 28),
            key(KeyCode::Char('q')),
        ]);
    let mut terminal = GenericTerminal::new(backend);
    app.run_with_terminal(&mut terminal).unwrap();

    let backend = terminal.into_backend();
    assert!(!backend.is_raw_mode());
    assert!(!backend.is_alternate_screen());
    assert!(!backend.is_cursor_hidden());
    assert!(!backend.is_mouse_captured());
    assert_eq!(app.archive().view().active(), Section::Mission);
    assert!(!app.archive().is_mounted());

    let output = String::from_utf8_lossy(&backend.into_writer()).to_string();
    assert!(output.starts_with("\u{1b}[?1049h"));
    // Leaving the alternate screen is the last thing written.
    assert!(output.trim_end().ends_with("\u{1b}[?1049l"));
}

#[test]
fn test_run_loop_with_mouse() {
    let config = AppConfig {
        enable_mouse: true,
        ..AppConfig::default()
    };
    let mut app = VelApp::new(
        Archive::with_parts(
            Periods::default(),
            Pcg64::seed_from_u64(1),
            FixedClock::new(
                NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
        ),
        config,
    );
    let backend = TestableBackend::new(Vec::new(), 100, 30)
        .with_polls(vec![true])
        .with_events(vec![key(KeyCode::Char('q'))]);
    let mut terminal = GenericTerminal::new(backend);
    app.run_with_terminal(&mut terminal).unwrap();

    let output = String::from_utf8_lossy(&terminal.into_backend().into_writer()).to_string();
    assert!(output.contains("\u{1b}[?1000h"));
    assert!(output.contains("\u{1b}[?1000l"));
}
