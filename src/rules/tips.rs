//! Static financial-literacy tips appended to every non-empty feed.

use once_cell::sync::Lazy;

use super::{Area, Recommendation, RecommendationKind, Severity};

struct Tip {
    slug: &'static str,
    priority: u8,
    title: &'static str,
    detail: &'static str,
}

/// Generic tips at fixed low priorities, highest first.
static TIPS: Lazy<Vec<Tip>> = Lazy::new(|| {
    vec![
        Tip {
            slug: "regla-50-30-20",
            priority: 24,
            title: "Aplica la regla 50/30/20",
            detail: "Destina el 50% de tus ingresos a necesidades, 30% a gustos y 20% a ahorro e inversión.",
        },
        Tip {
            slug: "ahorro-automatico",
            priority: 23,
            title: "Automatiza tu ahorro",
            detail: "Programa una transferencia automática a tu cuenta de ahorro el mismo día que recibes tu sueldo.",
        },
        Tip {
            slug: "fondo-emergencia",
            priority: 22,
            title: "Construye tu fondo de emergencia",
            detail: "Reúne entre 3 y 6 meses de gastos en una cuenta líquida antes de invertir en activos de riesgo.",
        },
        Tip {
            slug: "revisa-suscripciones",
            priority: 21,
            title: "Audita tus suscripciones cada trimestre",
            detail: "Las suscripciones que no usas son dinero que se va en silencio. Cancela las que no recuerdes haber usado este mes.",
        },
        Tip {
            slug: "paga-tarjeta-completa",
            priority: 20,
            title: "Paga el total de tu tarjeta",
            detail: "Pagar solo el mínimo multiplica el costo real de tus compras por los intereses acumulados.",
        },
        Tip {
            slug: "gastos-hormiga",
            priority: 19,
            title: "Registra los gastos hormiga",
            detail: "Cafés, domicilios y antojos pequeños suman más de lo que crees. Regístralos una semana y compruébalo.",
        },
        Tip {
            slug: "presupuesto-mensual",
            priority: 18,
            title: "Haz un presupuesto cada mes",
            detail: "Un presupuesto no es una camisa de fuerza: es saber a dónde va tu dinero antes de gastarlo.",
        },
        Tip {
            slug: "compras-impulsivas",
            priority: 17,
            title: "Espera 24 horas antes de comprar",
            detail: "Para compras no planeadas, deja pasar un día. La mayoría de los antojos no sobreviven la espera.",
        },
        Tip {
            slug: "metas-concretas",
            priority: 16,
            title: "Define metas con monto y fecha",
            detail: "\"Ahorrar más\" no es una meta. \"Reunir $2.000.000 antes de diciembre\" sí lo es.",
        },
        Tip {
            slug: "avalancha-deudas",
            priority: 15,
            title: "Ataca primero la deuda más cara",
            detail: "Ordena tus deudas por tasa de interés y abona extra a la más costosa mientras pagas el mínimo del resto.",
        },
        Tip {
            slug: "bola-de-nieve",
            priority: 14,
            title: "O usa la bola de nieve",
            detail: "Si te motiva más ver avances rápidos, liquida primero la deuda más pequeña y usa esa cuota para la siguiente.",
        },
        Tip {
            slug: "compara-precios",
            priority: 13,
            title: "Compara antes de compras grandes",
            detail: "Para cualquier compra importante cotiza al menos tres opciones. Diez minutos de comparación suelen pagarse solos.",
        },
        Tip {
            slug: "revisa-extractos",
            priority: 12,
            title: "Revisa tus extractos cada mes",
            detail: "Cobros duplicados, suscripciones fantasma y fraudes pequeños se detectan leyendo el extracto, no ignorándolo.",
        },
        Tip {
            slug: "ingresos-extra",
            priority: 11,
            title: "Diversifica tus fuentes de ingreso",
            detail: "Un ingreso adicional, aunque pequeño, reduce el riesgo de depender de un solo pagador.",
        },
        Tip {
            slug: "cocina-en-casa",
            priority: 10,
            title: "Cocina más, pide menos",
            detail: "Los domicilios frecuentes pueden costar varias veces lo que cuesta cocinar lo mismo en casa.",
        },
        Tip {
            slug: "seguros-basicos",
            priority: 9,
            title: "Protege lo que no podrías reponer",
            detail: "Un seguro de salud o de hogar adecuado evita que un imprevisto destruya años de ahorro.",
        },
        Tip {
            slug: "ahorro-pension",
            priority: 8,
            title: "Empieza a ahorrar para el retiro ya",
            detail: "El interés compuesto premia los años, no los montos. Empezar temprano vale más que aportar mucho tarde.",
        },
        Tip {
            slug: "inflacion",
            priority: 7,
            title: "No dejes el dinero quieto",
            detail: "El efectivo bajo el colchón pierde poder adquisitivo cada año. El ahorro de largo plazo debe estar invertido.",
        },
        Tip {
            slug: "educacion-financiera",
            priority: 6,
            title: "Invierte en tu educación financiera",
            detail: "Un libro o curso de finanzas personales al año cambia decisiones que valen mucho más que su precio.",
        },
        Tip {
            slug: "celebra-avances",
            priority: 5,
            title: "Celebra tus avances",
            detail: "Reconocer cada meta cumplida hace sostenible el hábito. Las finanzas sanas son una maratón, no un sprint.",
        },
    ]
});

/// Materializes the tip table as recommendations, highest priority first.
pub fn all() -> Vec<Recommendation> {
    TIPS.iter()
        .map(|tip| Recommendation {
            id: format!("tip:{}", tip.slug),
            kind: RecommendationKind::Tip,
            severity: Severity::Info,
            area: Area::Education,
            title: tip.title.to_string(),
            detail: tip.detail.to_string(),
            priority: tip.priority,
        })
        .collect()
}
