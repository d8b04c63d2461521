use crate::math::{Point, UnitVector};
use crate::query::Contact;
use crate::shape::Ball;
use num::Zero;

/// Contact between balls.
///
/// Returns `None` if the balls don't touch, or if their centers coincide (the contact normal
/// would be undefined). Touching balls yield a contact with a zero depth.
#[inline]
pub fn contact_ball_ball(
    center1: &Point,
    b1: &Ball,
    center2: &Point,
    b2: &Ball,
) -> Option<Contact> {
    let center2_1 = center2 - center1;
    let distance = center2_1.norm();

    if distance.is_zero() {
        return None;
    }

    let depth = b1.radius + b2.radius - distance;

    if depth < 0.0 {
        return None;
    }

    let normal = UnitVector::new_unchecked(center2_1 / distance);

    Some(Contact::new(
        *normal * b1.radius,
        -*normal * b2.radius,
        normal,
        depth,
    ))
}
