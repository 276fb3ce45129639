//! Prints the reference areas: circle r=5, the 3-4-5 triangle, and whether
//! that triangle is right-angled.

use planar::prelude::*;

fn main() -> Result<(), GeometryError> {
    let circle = Circle::new(5.0)?;
    let tri = Triangle::new(3.0, 4.0, 5.0)?;
    println!("{circle} area: {}", area(&circle));
    println!("{tri} area: {}", area(&tri));
    println!("Is 3-4-5 right-angled? {}", tri.is_right());
    match area_of(&"hexagon") {
        Ok(a) => println!("unexpected area {a}"),
        Err(err) => println!("area_of(\"hexagon\"): {err}"),
    }
    Ok(())
}
