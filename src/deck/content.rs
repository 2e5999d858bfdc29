//! Slide copy for the Turnero ZS demo deck.

/// How an entry is laid out on its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout<'a> {
    /// Full-bleed colored slide with a large centered title.
    /// Each `\n`-separated line of the subtitle becomes its own paragraph.
    Title { subtitle: &'a str },
    /// Title over a single column of points, with an optional video caption.
    Content {
        points: &'a [&'a str],
        video: Option<&'a str>,
    },
    TwoColumn {
        left: &'a [&'a str],
        right: &'a [&'a str],
    },
}

/// One slide of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEntry<'a> {
    pub title: &'a str,
    pub layout: SlideLayout<'a>,
}

impl<'a> SlideEntry<'a> {
    pub const fn title_slide(title: &'a str, subtitle: &'a str) -> Self {
        Self {
            title,
            layout: SlideLayout::Title { subtitle },
        }
    }

    pub const fn content_slide(
        title: &'a str,
        points: &'a [&'a str],
        video: Option<&'a str>,
    ) -> Self {
        Self {
            title,
            layout: SlideLayout::Content { points, video },
        }
    }

    pub const fn two_column_slide(title: &'a str, left: &'a [&'a str], right: &'a [&'a str]) -> Self {
        Self {
            title,
            layout: SlideLayout::TwoColumn { left, right },
        }
    }

    /// Video file named in the caption, if any.
    pub fn video(&self) -> Option<&'a str> {
        match self.layout {
            SlideLayout::Content { video, .. } => video,
            _ => None,
        }
    }
}

/// Title stored in the document properties.
pub const DECK_TITLE: &str = "Turnero ZS";

pub const DECK: &[SlideEntry<'static>] = &[
    SlideEntry::title_slide(
        "Turnero ZS",
        "Sistema de Gestión de Turnos\nPara Centros de Salud Argentinos",
    ),
    SlideEntry::content_slide(
        "Problema y Contexto",
        &[
            "❌ Demoras prolongadas en atención a pacientes",
            "❌ Desorganización en las colas de espera",
            "❌ Información fragmentada entre sistemas",
            "❌ Falta de visibilidad en tiempo real",
            "",
            "✅ Solución: Sistema integrado de gestión de turnos",
            "✅ Contexto: Sistema de salud argentino (CAPS/Hospitales)",
            "✅ Objetivo: Reducir tiempos de espera y mejorar experiencia",
        ],
        None,
    ),
    SlideEntry::content_slide(
        "Características Principales",
        &[
            "✅ Gestión de turnos en tiempo real",
            "✅ Cola de pacientes diaria con múltiples estados",
            "✅ Pantalla pública de avance (Realtime)",
            "✅ Control de profesionales y consultorios",
            "✅ Sistema de roles y permisos granulares",
            "✅ Múltiples instituciones en una plataforma",
            "✅ Toggle para cargar pacientes habilitados o pendientes",
            "✅ Audio TTS para llamada de pacientes",
        ],
        None,
    ),
    SlideEntry::content_slide(
        "Flujo del Paciente en el Sistema",
        &[
            "📋 PENDIENTE → ✅ DISPONIBLE → 📢 LLAMADO → ✓ ATENDIDO",
            "",
            "• Pendiente: Paciente registrado, requiere habilitación",
            "  (Solo el creador puede habilitar)",
            "",
            "• Disponible: Paciente habilitado, listo para ser llamado",
            "",
            "• Llamado: Paciente siendo llamado (con audio TTS)",
            "",
            "• Atendido: Consulta completada (fin del proceso)",
        ],
        Some("01-flujo-paciente-overview.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 1: Login y Autenticación",
        &[
            "🔐 Autenticación segura con Supabase Auth",
            "",
            "• Ingresar credenciales (email + password)",
            "• Sistema reconoce múltiples instituciones asignadas",
            "• Seleccionar institución de trabajo",
            "• Acceder al dashboard según rol",
            "",
            "Videos:",
            "  • 02-login-admin.mp4",
            "  • 03-login-usuario-general.mp4",
        ],
        None,
    ),
    SlideEntry::content_slide(
        "Demo 2: Dashboard Principal",
        &[
            "📊 Interfaz principal del sistema",
            "",
            "Información visible:",
            "• Cantidad de pacientes por estado (Pendiente, Disponible, etc.)",
            "• Filtros avanzados (Servicio, Profesional, Consultorio, Estado)",
            "• Lista de pacientes en tiempo real",
            "• Botón para cargar nuevo paciente",
            "• Información de cada paciente (hora de carga, profesional, etc.)",
        ],
        Some("04-dashboard-overview.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 3: Cargar Nuevo Paciente (Parte 1)",
        &[
            "📝 Abrir diálogo 'Cargar Nuevo Paciente'",
            "",
            "Pasos:",
            "1. Clic en botón '+ Cargar Paciente'",
            "2. Modal scroll aparece (se puede desplazar si hay mucho contenido)",
            "3. Ingresar Nombre Completo",
            "4. Ingresar DNI",
            "5. Validación automática de campos",
        ],
        Some("05-cargar-paciente-form.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 4: Cargar Nuevo Paciente (Parte 2)",
        &[
            "🏥 Seleccionar servicios/profesionales",
            "",
            "Pasos:",
            "1. Checkboxes múltiples para servicios",
            "2. Checkboxes múltiples para profesionales asignados hoy",
            "3. Contador de seleccionados",
            "4. Puede seleccionar múltiples opciones",
            "5. Modal scroll permite ver muchas opciones",
        ],
        Some("06-cargar-paciente-servicios.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 5: Toggle Estado Inicial (⭐ NUEVA FEATURE)",
        &[
            "🎚️ Control de estado inicial del paciente",
            "",
            "Opciones:",
            "⟳ Pendiente (defecto, ámbar)",
            "   → Requiere habilitación posterior",
            "   → Solo el creador puede habilitar",
            "",
            "✓ Disponible (verde)",
            "   → Inmediatamente disponible para atención",
            "   → Ya está habilitado",
            "",
            "💡 Permite flexibilidad en el flujo de carga",
        ],
        Some("07-cargar-paciente-toggle.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 6: Confirmar Carga de Paciente",
        &[
            "✅ Finalizar carga del paciente",
            "",
            "Pasos:",
            "1. Clic en botón 'Cargar Paciente'",
            "2. Modal se cierra automáticamente",
            "3. Paciente aparece en la cola",
            "4. Estado según selección (Pendiente o Disponible)",
            "5. Hora de carga se registra automáticamente",
            "6. Optimistic UI: aparece inmediatamente",
        ],
        Some("08-cargar-paciente-submit.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 7: Gestión de Pacientes en Cola",
        &[
            "📋 Vista completa de la cola del día",
            "",
            "Información visible por paciente:",
            "• Número de orden (001, 002, 003, etc.)",
            "• Nombre y DNI del paciente",
            "• Servicio solicitado",
            "• Estado con código de color",
            "• Profesional y consultorio asignado",
            "• Hora de carga (con 🕐 icon)",
            "• Botones de acción según estado",
        ],
        Some("09-cola-pacientes-overview.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 8: Habilitar Paciente (Control de Permisos)",
        &[
            "🔒 Solo el admin que cargó el paciente puede habilitarlo",
            "",
            "Casos:",
            "✅ Creador del paciente:",
            "   → Ve botón 'Habilitar' activo",
            "   → Puede cambiar de Pendiente a Disponible",
            "",
            "❌ Otro usuario:",
            "   → Ve botón 'Habilitar' deshabilitado",
            "   → Muestra icono 🔒 (candado)",
            "   → Explicación en tooltip",
            "",
            "💡 Seguridad: Solo quien carga controla habilitación",
        ],
        Some("10-habilitar-paciente.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 9: Control de Permisos en Acción",
        &[
            "🚫 Visualizar restricción de permisos",
            "",
            "Escenario:",
            "• Paciente cargado por Admin A",
            "• Admin B intenta habilitar",
            "• Sistema muestra: Botón deshabilitado con 🔒",
            "",
            "Beneficios:",
            "✅ Responsabilidad clara (quién cargó, quién habilita)",
            "✅ Previene cambios no autorizados",
            "✅ Trazabilidad del proceso",
            "✅ Seguridad del flujo",
        ],
        Some("11-permiso-denegado.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 10: Llamar Paciente (Audio TTS)",
        &[
            "📢 Sistema de llamada con audio en español",
            "",
            "Proceso:",
            "1. Seleccionar paciente en estado 'Disponible'",
            "2. Clic en botón 'Llamar'",
            "3. Audio TTS anuncia: 'Paciente [nombre], consultorio [número]'",
            "4. Duración: ~11 segundos (dos anuncios)",
            "5. Estado cambia a 'Llamado'",
            "",
            "💡 Diferenciador: Audio generado en tiempo real",
            "💡 Accesibilidad: Ayuda a pacientes con discapacidad visual",
        ],
        Some("12-llamar-paciente.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 11: Registrar Atención Completada",
        &[
            "✓ Marcar paciente como atendido",
            "",
            "Proceso:",
            "1. Paciente en estado 'Llamado' (en consulta)",
            "2. Clic en botón 'Registrar Atención'",
            "3. Estado cambia a 'Atendido'",
            "4. Timestamp automático de fin",
            "5. Paciente completa su flujo",
            "",
            "Datos registrados:",
            "• Hora de carga",
            "• Hora de habilitación (si aplica)",
            "• Hora de llamada",
            "• Hora de atención completada",
        ],
        Some("13-registrar-atencion.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 12: Filtros Avanzados (Parte 1)",
        &[
            "🔍 Filtrado por criterios individuales",
            "",
            "Opciones de filtro:",
            "• Por Servicio (Cardiología, Pediatría, etc.)",
            "• Por Profesional (Nombre del doctor)",
            "• Por Consultorio (A, B, C, etc.)",
            "• Por Estado (Pendiente, Disponible, Llamado, Atendido)",
            "",
            "Interacción:",
            "1. Seleccionar filtro en dropdown",
            "2. Cola se actualiza inmediatamente",
            "3. Mostrar cantidad de resultados",
            "4. Botón 'Limpiar filtros' para resetear",
        ],
        Some("14-filtros-basicos.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 13: Filtros Avanzados (Parte 2)",
        &[
            "🔍 Combinación de múltiples filtros",
            "",
            "Ejemplos:",
            "• Filtrar: Servicio=Cardiología + Estado=Disponible",
            "• Filtrar: Profesional=Dr. García + Estado=Pendiente",
            "• Filtrar: Consultorio=A + Servicio=Pediatría",
            "",
            "Resultados:",
            "• Actualización en tiempo real",
            "• Contador de pacientes que cumplen criterios",
            "• Todos los filtros se aplican simultáneamente",
            "• Limpiar todo con un clic",
        ],
        Some("15-filtros-multiples.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 14: Pantalla Pública (Parte 1)",
        &[
            "📺 Visualización pública de la cola para pacientes",
            "",
            "Características:",
            "• URL diferente: /pantalla/[institution-id]",
            "• No requiere login (o solo rol 'pantalla')",
            "• Información clara y legible",
            "• Diseño atractivo y simple",
            "• Actualización automática en tiempo real",
            "• Responsive (funciona en TV, tablet, mobile)",
            "",
            "Información visible:",
            "• Próximo paciente a ser atendido",
            "• Servicio y profesional",
            "• Consultorio asignado",
        ],
        Some("16-pantalla-publica-overview.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 15: Sincronización en Tiempo Real",
        &[
            "⚡ Actualización instantánea sin recargar",
            "",
            "Flujo demostrativo:",
            "1. Pantalla pública abierta en una TV/monitor",
            "2. Admin carga paciente en dashboard",
            "3. Paciente aparece INMEDIATAMENTE en pantalla (Supabase Realtime)",
            "4. Admin habilita paciente",
            "5. Estado se actualiza en pantalla",
            "6. Admin llamar paciente",
            "7. Cambio visible en tiempo real",
            "",
            "💡 Tecnología: Supabase Realtime Channels",
            "💡 Diferenciador: No requiere polling o refresco",
        ],
        Some("17-pantalla-realtime.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 16: Sistema de Roles y Permisos",
        &[
            "👥 Diferentes vistas según rol del usuario",
            "",
            "Roles implementados:",
            "👤 Admin: Acceso completo (todos los servicios)",
            "👤 Administrativo: Cargar pacientes, habilitar",
            "👤 Médico: Solo sus servicios y pacientes",
            "👤 Enfermería: Auxiliar del administrativo",
            "👤 Pantalla: Solo lectura de cola pública",
            "",
            "Demostración:",
            "• Login con diferentes usuarios",
            "• Mostrar interfaz diferente por rol",
            "• Explicar permisos de cada rol",
        ],
        Some("18-roles-y-permisos.mp4"),
    ),
    SlideEntry::content_slide(
        "Demo 17: Detalles de Paciente",
        &[
            "ℹ️ Información completa de cada paciente",
            "",
            "Datos visibles:",
            "• Nombre completo del paciente",
            "• DNI",
            "• Número de orden (001, 002, etc.)",
            "• Servicio seleccionado",
            "• Profesional asignado",
            "• Consultorio asignado",
            "• Hora de carga (con 🕐 icon)",
            "• Estado actual",
            "• Timestamps de transiciones (si aplica)",
        ],
        Some("19-info-paciente.mp4"),
    ),
    SlideEntry::two_column_slide(
        "Stack Tecnológico",
        &[
            "Frontend:",
            "• Next.js 15.5.2",
            "• React 19",
            "• TypeScript",
            "• Tailwind CSS 4",
            "• shadcn/ui 3",
            "",
            "Testing:",
            "• Vitest",
            "• React Testing Library",
            "• 152 tests passing",
        ],
        &[
            "Backend:",
            "• Supabase",
            "• PostgreSQL",
            "• Supabase Auth",
            "• Supabase Realtime",
            "",
            "DevOps:",
            "• GitHub Actions",
            "• Vercel Deployment",
            "• Row Level Security (RLS)",
            "• Multi-tenancy",
        ],
    ),
    SlideEntry::content_slide(
        "Métricas y Resultados Alcanzados",
        &[
            "✅ Objetivos del MVP:",
            "  • Reducir tiempo de espera en 25-40%",
            "  • Disminuir absentismo en 10-20%",
            "  • Alcanzar ≥85% ocupación de horarios",
            "  • Mantener ≥95% trazabilidad completa",
            "",
            "✅ Características implementadas:",
            "  • Gestión de cola diaria en tiempo real",
            "  • Sistema de llamada con audio TTS",
            "  • Pantalla pública con Realtime",
            "  • Control granular de permisos",
            "  • 152 tests automatizados",
            "  • Sin errores de typecheck/lint",
        ],
        None,
    ),
    SlideEntry::content_slide(
        "Ventajas Competitivas",
        &[
            "🚀 Sistema integrado (sin cambios en HSI)",
            "⚡ Tiempo real (sin recargas)",
            "📱 Responsive (desktop, tablet, mobile)",
            "🔒 Seguro (RLS, autenticación, permisos)",
            "🌐 Multi-tenancy (múltiples instituciones)",
            "♿ Accesible (WCAG compliant)",
            "📊 Escalable (PostgreSQL + Supabase)",
            "🎯 Intuitivo (UI clara y lógica)",
            "🎚️ Toggle para estado inicial (flexibilidad)",
            "📢 Audio TTS en español (diferenciador)",
        ],
        None,
    ),
    SlideEntry::two_column_slide(
        "Roadmap Futuro",
        &[
            "Corto Plazo (1-2 meses):",
            "✓ Integración HSI",
            "✓ Reportes avanzados",
            "✓ Notificaciones push",
            "",
            "Mediano Plazo (3-6 meses):",
            "✓ App móvil para pacientes",
            "✓ Confirmación por SMS",
            "✓ Asignación automática",
        ],
        &[
            "Largo Plazo (6+ meses):",
            "✓ Predicción de demora (ML)",
            "✓ Gestor de camas",
            "✓ Sistema de emergencia",
            "",
            "Opcionales:",
            "✓ Integración con PACS",
            "✓ Teleconsulta",
            "✓ Analítica avanzada",
        ],
    ),
    SlideEntry::content_slide(
        "Conclusión y Próximos Pasos",
        &[
            "✅ Sistema completo de gestión de turnos",
            "✅ Mejora significativa en experiencia del paciente",
            "✅ Fácil integración con institutos existentes",
            "",
            "📈 Impacto esperado:",
            "• Reducción de tiempos de espera",
            "• Mayor satisfacción de pacientes",
            "• Optimización de recursos",
            "• Mejor trazabilidad de procesos",
            "",
            "🎯 Próximos pasos:",
            "• Feedback de instituciones piloto",
            "• Refinamiento según necesidades",
            "• Rollout a más instituciones",
        ],
        None,
    ),
    SlideEntry::title_slide(
        "¡Gracias!",
        "GitHub: github.com/licjavierbarrios/turnero-zs\n\nEmail: licjavierbarrios@gmail.com\n\nDemo: [URL en producción]",
    ),
];
