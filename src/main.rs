use geo_types::polygon;
use maidenhead_rs::{LocatorCell, LocatorGrid, MaidenheadError, decode, encode};

fn main() -> Result<(), MaidenheadError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let lat = 52.2297;
    let lng = 21.0122;

    let locator = encode(lat, lng, 6)?;
    println!("Locator: {}", locator);

    let center = decode(&locator)?;
    println!("Center: ({}, {})", center.lat, center.lng);

    let cell = LocatorCell::from_locator(&locator)?;
    println!("Parent: {:?}", cell.parent().map(|p| p.id));
    println!("Polygon: {:?}", cell.to_polygon());

    let region = polygon![
        (x: -5.0, y: 50.0),
        (x: -5.0, y: 51.0),
        (x: -4.0, y: 51.0),
        (x: -4.0, y: 50.0),
    ];
    let grid = LocatorGrid::builder().precision(4).region(region).build()?;
    println!("Coverage: {:?}", grid.locators());

    Ok(())
}
