use pgn_space_recover::{RecoverOptions, recover_spaces_with};

const FILE: &str = "tests/data/partida-sample.pgn";

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Comments as they come out of the PGN parser, spaces stripped.
	let mangled_comments = [
		"{Lasblancastienendospiezasporlatorre,¡yelataque!}",
		"{Unadelasrazonesqueexplicanlapopularidaddelasaperturasdepeóndedamaesquedesdelaprimerajugadapresentanproblemasaldefensor.",
	];

	let options = RecoverOptions::default();

	for mangled in mangled_comments {
		let recovery = recover_spaces_with(mangled, FILE, &options)?;
		println!(
			"line {:>3} (distance {:>3}, exact: {:<5}, trimmed: {:<5})\n  {}\n  {}\n",
			recovery.line_index + 1,
			recovery.distance,
			recovery.exact_match,
			recovery.trimmed,
			mangled,
			recovery.text
		);
	}

	Ok(())
}
