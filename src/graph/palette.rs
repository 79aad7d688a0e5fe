use rand::Rng;

use crate::config::Theme;

const LIGHT_BASE: u16 = 75;
const DARK_BASE: u16 = 175;
const VARIATION: u16 = 55;

/// Random greyish color whose lightness band suits `theme`.
pub fn random_color<R: Rng>(theme: Theme, rng: &mut R) -> String {
	let base = match theme {
		Theme::Light => LIGHT_BASE,
		Theme::Dark => DARK_BASE,
	};
	let mut channel = || (rng.gen_range(0..VARIATION) + base).min(255) as u8;
	let (r, g, b) = (channel(), channel(), channel());
	format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn channels(hex: &str) -> Vec<u8> {
		(0..3)
			.map(|i| u8::from_str_radix(&hex[1 + 2 * i..3 + 2 * i], 16).unwrap())
			.collect()
	}

	#[test]
	fn stays_inside_theme_band() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let light = random_color(Theme::Light, &mut rng);
			assert_eq!(light.len(), 7);
			assert!(channels(&light).iter().all(|&c| (75..130).contains(&c)));
			let dark = random_color(Theme::Dark, &mut rng);
			assert!(channels(&dark).iter().all(|&c| (175..230).contains(&c)));
		}
	}

	#[test]
	fn same_seed_same_color() {
		let a = random_color(Theme::Dark, &mut StdRng::seed_from_u64(42));
		let b = random_color(Theme::Dark, &mut StdRng::seed_from_u64(42));
		assert_eq!(a, b);
	}
}
