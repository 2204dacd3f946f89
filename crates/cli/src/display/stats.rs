//! Affichage des statistiques

use adnpix_core::{ScaledImage, Sequence};

/// Affiche les statistiques d'un encodage
pub fn display_encode_stats(sequence: &Sequence, scaled: &ScaledImage, group_size: usize) {
    let padded_len = sequence.len().div_ceil(group_size) * group_size;
    let kmer_pixels = padded_len / group_size;
    let canvas_width = scaled.width() / scaled.factor();
    let canvas_height = scaled.height() / scaled.factor();
    let cells = canvas_width as usize * canvas_height as usize;

    println!("\n┌────────────────────────────────────────────────┐");
    println!("│ Statistiques d'encodage                        │");
    println!("├────────────────────────────────────────────────┤");
    println!("│ Bases lues             : {:>8}              │", sequence.len());
    println!("│ Bases de remplissage   : {:>8}              │", padded_len - sequence.len());
    println!("│ Pixels k-mer (K={:>2})    : {:>8}              │", group_size, kmer_pixels);
    println!("│ Pixels noirs ajoutés   : {:>8}              │", cells - kmer_pixels);
    println!("│ Grille                 : {:>8}              │", format!("{}x{}", canvas_width, canvas_height));
    println!("│ Facteur d'échelle      : {:>8}              │", scaled.factor());
    println!("│ Image                  : {:>8}              │", format!("{}x{}", scaled.width(), scaled.height()));
    println!("│ GC                     : {:>8.1}%             │", sequence.gc_ratio() * 100.0);
    println!("└────────────────────────────────────────────────┘");
}
