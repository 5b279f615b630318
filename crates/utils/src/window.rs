//! Affichage d'une fenêtre de la séquence en lignes de 0/1
//!
//! Chaque ligne commence par l'indice de son premier site. La ligne
//! contenant le site marqué porte un `*`, un `|` précède le site marqué,
//! la ligne est centrée sur lui et se termine par `:indice`.

use gc_core::SiteState;
use std::io::{self, Write};

/// Largeur par défaut d'une ligne
pub const DEFAULT_WIDTH: usize = 75;
/// Nombre de sites affichés de part et d'autre d'un site centré
pub const DEFAULT_STRIDE: usize = 30;

/// Écrit les sites `start..=end`, `width` sites par ligne
///
/// `start` hors séquence est ramené à 0, `end` absent ou hors séquence au
/// dernier site, une largeur nulle à 70.
pub fn write_window(
    out: &mut dyn Write,
    sites: &[SiteState],
    start: usize,
    end: Option<usize>,
    width: usize,
    mark: Option<usize>,
) -> io::Result<()> {
    if sites.is_empty() {
        return Ok(());
    }
    let last = sites.len() - 1;
    let start = if start > last { 0 } else { start };
    let end = match end {
        Some(e) if e <= last => e,
        _ => last,
    };
    let width = if width == 0 { 70 } else { width };

    let mut i = start;
    while i <= end {
        let end_slice = (i + width - 1).min(end);
        let marked = mark.filter(|&m| m >= i && m <= end_slice);

        let (mut left_pad, mut right_pad) = (0, 0);
        if let Some(m) = marked {
            let left_width = m - i;
            let right_width = end_slice - m;
            if left_width < right_width {
                left_pad = right_width - left_width;
            } else {
                right_pad = left_width - right_width;
            }
        }

        let flag = if marked.is_some() { '*' } else { ' ' };
        write!(out, "{:>7}{} ", i, flag)?;
        write!(out, "{:1$}", "", left_pad)?;
        for (j, site) in sites.iter().enumerate().take(end_slice + 1).skip(i) {
            if Some(j) == marked {
                write!(out, "|")?;
            }
            write!(out, "{}", site.as_char())?;
        }
        write!(out, "{:1$}", "", right_pad)?;
        if let Some(m) = marked {
            write!(out, ":{:>7}", m)?;
        }
        writeln!(out)?;

        i += width;
    }
    Ok(())
}

/// Écrit `stride` sites de part et d'autre de `mark`
pub fn write_centered(
    out: &mut dyn Write,
    sites: &[SiteState],
    mark: usize,
    stride: usize,
    width: usize,
) -> io::Result<()> {
    let start = mark.saturating_sub(stride);
    let end = mark.saturating_add(stride);
    write_window(out, sites, start, Some(end), width, Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(
        sites: &[SiteState],
        start: usize,
        end: Option<usize>,
        width: usize,
        mark: Option<usize>,
    ) -> String {
        let mut out = Vec::new();
        write_window(&mut out, sites, start, end, width, mark).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_and_mark() {
        let sites = [SiteState::Homozygous; 12];
        let text = render(&sites, 0, None, 5, Some(7));
        assert_eq!(
            text,
            "      0  00000\n      5* 00|000:      7\n     10  00\n"
        );
    }

    #[test]
    fn test_mark_is_centered() {
        let mut sites = [SiteState::Homozygous; 5];
        sites[1] = SiteState::Heterozygous;
        // gauche 1, droite 3: deux espaces à gauche
        let text = render(&sites, 0, None, 5, Some(1));
        assert_eq!(text, "      0*   0|1000:      1\n");
    }

    #[test]
    fn test_out_of_range_bounds_are_clamped() {
        let sites = [SiteState::Heterozygous; 4];
        let text = render(&sites, 10, Some(99), 0, None);
        assert_eq!(text, "      0  1111\n");
    }

    #[test]
    fn test_centered_window() {
        let sites = [SiteState::Homozygous; 100];
        let mut out = Vec::new();
        write_centered(&mut out, &sites, 50, 2, 75).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "     48* 00|000:     50\n");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render(&[], 0, None, 5, None), "");
    }
}
