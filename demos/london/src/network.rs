//! Embedded four-line section of the London Underground.
//!
//! Piccadilly, Central, Victoria and Jubilee, all interchanging at Green Park.
//! Each line carries its own coordinate table, so Green Park is declared four
//! times with the same position.

use std::io::Cursor;

use tn_network::{Line, NetworkResult, StationRegistry, load_lines_reader, load_stations_reader};

// ── Station coordinates ───────────────────────────────────────────────────────

const STATIONS_CSV: &str = "\
line,station,lat,lon\n\
Piccadilly,Hyde Park Corner,51.5027,-0.1526\n\
Piccadilly,Green Park,51.5069,-0.1426\n\
Piccadilly,Piccadilly Circus,51.5101,-0.1337\n\
Piccadilly,Leicester Square,51.5116,-0.1284\n\
Piccadilly,Covent Garden,51.5129,-0.1247\n\
Piccadilly,Holborn,51.5171,-0.1188\n\
Central,Oxford Circus,51.5154,-0.1410\n\
Central,Tottenham Court Road,51.5162,-0.1310\n\
Central,Chancery Lane,51.5185,-0.1110\n\
Central,St. Paul's,51.5143,-0.0972\n\
Central,Bank,51.5133,-0.0890\n\
Central,Green Park,51.5069,-0.1426\n\
Victoria,Victoria,51.4952,-0.1440\n\
Victoria,Green Park,51.5069,-0.1426\n\
Victoria,Pimlico,51.4893,-0.1334\n\
Victoria,Vauxhall,51.4857,-0.1232\n\
Victoria,Stockwell,51.4722,-0.1226\n\
Victoria,Brixton,51.4627,-0.1140\n\
Jubilee,Westminster,51.5010,-0.1246\n\
Jubilee,Green Park,51.5069,-0.1426\n\
Jubilee,Bond Street,51.5142,-0.1494\n\
Jubilee,Baker Street,51.5225,-0.1570\n\
Jubilee,Waterloo,51.5033,-0.1133\n\
Jubilee,Southwark,51.5043,-0.1046\n\
";

// ── Line definitions (travel order) ───────────────────────────────────────────

const LINES_CSV: &str = "\
line,color,station\n\
Piccadilly,blue,Hyde Park Corner\n\
Piccadilly,blue,Green Park\n\
Piccadilly,blue,Piccadilly Circus\n\
Piccadilly,blue,Leicester Square\n\
Piccadilly,blue,Covent Garden\n\
Piccadilly,blue,Holborn\n\
Central,red,Green Park\n\
Central,red,Oxford Circus\n\
Central,red,Tottenham Court Road\n\
Central,red,Chancery Lane\n\
Central,red,St. Paul's\n\
Central,red,Bank\n\
Victoria,lightblue,Victoria\n\
Victoria,lightblue,Green Park\n\
Victoria,lightblue,Pimlico\n\
Victoria,lightblue,Vauxhall\n\
Victoria,lightblue,Stockwell\n\
Victoria,lightblue,Brixton\n\
Jubilee,gray,Westminster\n\
Jubilee,gray,Green Park\n\
Jubilee,gray,Bond Street\n\
Jubilee,gray,Baker Street\n\
Jubilee,gray,Waterloo\n\
Jubilee,gray,Southwark\n\
";

/// Parse the embedded tables into a registry and the four lines.
pub fn load_inputs() -> NetworkResult<(StationRegistry, Vec<Line>)> {
    let registry = load_stations_reader(Cursor::new(STATIONS_CSV))?;
    let lines = load_lines_reader(Cursor::new(LINES_CSV))?;
    Ok((registry, lines))
}
