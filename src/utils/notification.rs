/// Cuerpo del email de notificación de puntos. El total que se enseña aquí
/// es solo informativo (pre-compuesto para el mensaje); el total real lo
/// decide el servidor y vuelve en la respuesta.
pub fn points_notification(company_name: &str, current_points: i64, delta: i64) -> String {
    if delta >= 0 {
        format!(
            "You earned {} points for {}! Your current point total is {}.",
            delta,
            company_name,
            current_points + delta
        )
    } else {
        format!(
            "You redeemed {} points at {}. Your current point total is {}.",
            delta.abs(),
            company_name,
            current_points - delta.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earning_points_adds_the_delta_to_the_displayed_total() {
        assert_eq!(
            points_notification("Acme", 4, 1),
            "You earned 1 points for Acme! Your current point total is 5."
        );
        assert_eq!(
            points_notification("Acme", 4, 2),
            "You earned 2 points for Acme! Your current point total is 6."
        );
    }

    #[test]
    fn redeeming_points_subtracts_the_delta() {
        assert_eq!(
            points_notification("Acme", 10, -4),
            "You redeemed 4 points at Acme. Your current point total is 6."
        );
    }
}
