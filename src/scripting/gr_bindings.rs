//! GR script bindings
//!
//! Registers every [`Gr`] operation under `gr.<name>` with the argument order
//! of the native entry point. Element counts are passed explicitly by the
//! script, exactly as the C API expects them.

use super::api::ScriptApi;
use super::value::{Args, ScriptValue};
use crate::constants;
use crate::gr::Gr;

/// Registers `$name` with a fixed arity; the body's value is converted with
/// `ScriptValue::from`.
macro_rules! bind {
    ($api:ident, $handle:ident, $name:literal, || $body:expr) => {{
        let $handle = $handle.clone();
        $api.register_function($name, move |values: &[ScriptValue]| {
            Args::new($name, values, 0)?;
            Ok(ScriptValue::from($body))
        });
    }};
    ($api:ident, $handle:ident, $name:literal, $arity:literal, |$args:ident| $body:expr) => {{
        let $handle = $handle.clone();
        $api.register_function($name, move |values: &[ScriptValue]| {
            let $args = Args::new($name, values, $arity)?;
            Ok(ScriptValue::from($body))
        });
    }};
}

pub(crate) use bind;

/// Registers the GR operations and the GR constant namespace.
pub fn register_gr(api: &mut ScriptApi, gr: Gr) {
    register_lifecycle(api, &gr);
    register_primitives(api, &gr);
    register_attributes(api, &gr);
    register_transforms(api, &gr);
    register_output(api, &gr);
    api.register_constants("gr", constants::table());
    tracing::debug!(target: "scripting", "Registered GR bindings");
}

fn register_lifecycle(api: &mut ScriptApi, gr: &Gr) {
    bind!(api, gr, "gr.opengks", || gr.opengks());
    bind!(api, gr, "gr.closegks", || gr.closegks());
    bind!(api, gr, "gr.emergencyclosegks", || gr.emergencyclosegks());
    bind!(api, gr, "gr.updategks", || gr.updategks());
    bind!(api, gr, "gr.openws", 3, |a| gr.openws(a.int(0)?, a.string(1)?, a.int(2)?)?);
    bind!(api, gr, "gr.closews", 1, |a| gr.closews(a.int(0)?));
    bind!(api, gr, "gr.activatews", 1, |a| gr.activatews(a.int(0)?));
    bind!(api, gr, "gr.deactivatews", 1, |a| gr.deactivatews(a.int(0)?));
    bind!(api, gr, "gr.clearws", || gr.clearws());
    bind!(api, gr, "gr.updatews", || gr.updatews());

    bind!(api, gr, "gr.inqdspsize", || {
        let size = gr.inqdspsize();
        ScriptValue::Array(vec![
            size.mwidth.into(),
            size.mheight.into(),
            size.width.into(),
            size.height.into(),
        ])
    });
    bind!(api, gr, "gr.inqwindow", || gr.inqwindow());
    bind!(api, gr, "gr.inqspace", || {
        let [zmin, zmax, rotation, tilt] = gr.inqspace();
        ScriptValue::Array(vec![
            zmin.into(),
            zmax.into(),
            (rotation as i32).into(),
            (tilt as i32).into(),
        ])
    });
    bind!(api, gr, "gr.inqscale", || gr.inqscale());
    bind!(api, gr, "gr.inqtextext", 3, |a| {
        let (tbx, tby) = gr.inqtextext(a.float(0)?, a.float(1)?, a.string(2)?)?;
        ScriptValue::Array(vec![tbx.into(), tby.into()])
    });
    bind!(api, gr, "gr.inqbbox", || gr.inqbbox());
    bind!(api, gr, "gr.tick", 2, |a| gr.tick(a.float(0)?, a.float(1)?));
    bind!(api, gr, "gr.adjustrange", 2, |a| gr.adjustrange(a.float(0)?, a.float(1)?));
}

fn register_primitives(api: &mut ScriptApi, gr: &Gr) {
    bind!(api, gr, "gr.polyline", 3, |a| {
        gr.polyline(a.count(0)?, &a.floats(1)?, &a.floats(2)?)
    });
    bind!(api, gr, "gr.polymarker", 3, |a| {
        gr.polymarker(a.count(0)?, &a.floats(1)?, &a.floats(2)?)
    });
    bind!(api, gr, "gr.fillarea", 3, |a| {
        gr.fillarea(a.count(0)?, &a.floats(1)?, &a.floats(2)?)
    });
    bind!(api, gr, "gr.cellarray", 7, |a| {
        gr.cellarray(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.count(4)?,
            a.count(5)?,
            &a.ints(6)?,
        )
    });
    bind!(api, gr, "gr.spline", 5, |a| {
        gr.spline(a.count(0)?, &a.floats(1)?, &a.floats(2)?, a.int(3)?, a.int(4)?)
    });
    bind!(api, gr, "gr.verrorbars", 5, |a| {
        gr.verrorbars(
            a.count(0)?,
            &a.floats(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
        )
    });
    bind!(api, gr, "gr.herrorbars", 5, |a| {
        gr.herrorbars(
            a.count(0)?,
            &a.floats(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
        )
    });
    bind!(api, gr, "gr.polyline3d", 4, |a| {
        gr.polyline3d(a.count(0)?, &a.floats(1)?, &a.floats(2)?, &a.floats(3)?)
    });
    bind!(api, gr, "gr.surface", 6, |a| {
        gr.surface(
            a.count(0)?,
            a.count(1)?,
            &a.floats(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
            a.int(5)?,
        )
    });
    bind!(api, gr, "gr.contour", 8, |a| {
        gr.contour(
            a.count(0)?,
            a.count(1)?,
            a.count(2)?,
            &a.floats(3)?,
            &a.floats(4)?,
            &a.floats(5)?,
            &a.floats(6)?,
            a.int(7)?,
        )
    });
    bind!(api, gr, "gr.drawimage", 7, |a| {
        gr.drawimage(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.count(4)?,
            a.count(5)?,
            &a.ints(6)?,
        )
    });

    bind!(api, gr, "gr.text", 3, |a| gr.text(a.float(0)?, a.float(1)?, a.string(2)?)?);
    bind!(api, gr, "gr.textext", 3, |a| {
        gr.textext(a.float(0)?, a.float(1)?, a.string(2)?)?
    });
    bind!(api, gr, "gr.titles3d", 3, |a| {
        gr.titles3d(a.string(0)?, a.string(1)?, a.string(2)?)?
    });

    bind!(api, gr, "gr.axes", 7, |a| {
        gr.axes(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.int(4)?,
            a.int(5)?,
            a.float(6)?,
        )
    });
    bind!(api, gr, "gr.grid", 6, |a| {
        gr.grid(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.int(4)?,
            a.int(5)?,
        )
    });
    bind!(api, gr, "gr.axes3d", 10, |a| {
        gr.axes3d(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.float(4)?,
            a.float(5)?,
            a.int(6)?,
            a.int(7)?,
            a.int(8)?,
            a.float(9)?,
        )
    });

    bind!(api, gr, "gr.drawrect", 4, |a| {
        gr.drawrect(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.fillrect", 4, |a| {
        gr.fillrect(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.drawarc", 6, |a| {
        gr.drawarc(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.int(4)?,
            a.int(5)?,
        )
    });
    bind!(api, gr, "gr.fillarc", 6, |a| {
        gr.fillarc(
            a.float(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.int(4)?,
            a.int(5)?,
        )
    });
    bind!(api, gr, "gr.drawarrow", 4, |a| {
        gr.drawarrow(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
}

fn register_attributes(api: &mut ScriptApi, gr: &Gr) {
    bind!(api, gr, "gr.setasf", 1, |a| gr.setasf(&a.ints(0)?));
    bind!(api, gr, "gr.setlineind", 1, |a| gr.setlineind(a.int(0)?));
    bind!(api, gr, "gr.setlinetype", 1, |a| gr.setlinetype(a.int(0)?));
    bind!(api, gr, "gr.setlinewidth", 1, |a| gr.setlinewidth(a.float(0)?));
    bind!(api, gr, "gr.setlinecolorind", 1, |a| gr.setlinecolorind(a.int(0)?));
    bind!(api, gr, "gr.setmarkerind", 1, |a| gr.setmarkerind(a.int(0)?));
    bind!(api, gr, "gr.setmarkertype", 1, |a| gr.setmarkertype(a.int(0)?));
    bind!(api, gr, "gr.setmarkersize", 1, |a| gr.setmarkersize(a.float(0)?));
    bind!(api, gr, "gr.setmarkercolorind", 1, |a| gr.setmarkercolorind(a.int(0)?));
    bind!(api, gr, "gr.settextind", 1, |a| gr.settextind(a.int(0)?));
    bind!(api, gr, "gr.settextfontprec", 2, |a| gr.settextfontprec(a.int(0)?, a.int(1)?));
    bind!(api, gr, "gr.setcharexpan", 1, |a| gr.setcharexpan(a.float(0)?));
    bind!(api, gr, "gr.setcharspace", 1, |a| gr.setcharspace(a.float(0)?));
    bind!(api, gr, "gr.settextcolorind", 1, |a| gr.settextcolorind(a.int(0)?));
    bind!(api, gr, "gr.setcharheight", 1, |a| gr.setcharheight(a.float(0)?));
    bind!(api, gr, "gr.setcharup", 2, |a| gr.setcharup(a.float(0)?, a.float(1)?));
    bind!(api, gr, "gr.settextpath", 1, |a| gr.settextpath(a.int(0)?));
    bind!(api, gr, "gr.settextalign", 2, |a| gr.settextalign(a.int(0)?, a.int(1)?));
    bind!(api, gr, "gr.setfillind", 1, |a| gr.setfillind(a.int(0)?));
    bind!(api, gr, "gr.setfillintstyle", 1, |a| gr.setfillintstyle(a.int(0)?));
    bind!(api, gr, "gr.setfillstyle", 1, |a| gr.setfillstyle(a.int(0)?));
    bind!(api, gr, "gr.setfillcolorind", 1, |a| gr.setfillcolorind(a.int(0)?));
    bind!(api, gr, "gr.setcolorrep", 4, |a| {
        gr.setcolorrep(a.int(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.setcolormap", 1, |a| gr.setcolormap(a.int(0)?));
    bind!(api, gr, "gr.colormap", || gr.colormap());
    bind!(api, gr, "gr.setarrowstyle", 1, |a| gr.setarrowstyle(a.int(0)?));
    bind!(api, gr, "gr.setshadow", 3, |a| {
        gr.setshadow(a.float(0)?, a.float(1)?, a.float(2)?)
    });
    bind!(api, gr, "gr.settransparency", 1, |a| gr.settransparency(a.float(0)?));
    bind!(api, gr, "gr.setcoordxform", 1, |a| gr.setcoordxform(&a.floats(0)?));
}

fn register_transforms(api: &mut ScriptApi, gr: &Gr) {
    bind!(api, gr, "gr.setscale", 1, |a| gr.setscale(a.int(0)?));
    bind!(api, gr, "gr.setwindow", 4, |a| {
        gr.setwindow(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.setviewport", 4, |a| {
        gr.setviewport(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.selntran", 1, |a| gr.selntran(a.int(0)?));
    bind!(api, gr, "gr.setclip", 1, |a| gr.setclip(a.int(0)?));
    bind!(api, gr, "gr.setwswindow", 4, |a| {
        gr.setwswindow(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.setwsviewport", 4, |a| {
        gr.setwsviewport(a.float(0)?, a.float(1)?, a.float(2)?, a.float(3)?)
    });
    bind!(api, gr, "gr.setspace", 4, |a| {
        gr.setspace(a.float(0)?, a.float(1)?, a.int(2)?, a.int(3)?)
    });
    bind!(api, gr, "gr.ndctowc", 2, |a| gr.ndctowc(a.float(0)?, a.float(1)?));
    bind!(api, gr, "gr.wctondc", 2, |a| gr.wctondc(a.float(0)?, a.float(1)?));
}

fn register_output(api: &mut ScriptApi, gr: &Gr) {
    bind!(api, gr, "gr.createseg", 1, |a| gr.createseg(a.int(0)?));
    bind!(api, gr, "gr.copysegws", 1, |a| gr.copysegws(a.int(0)?));
    bind!(api, gr, "gr.redrawsegws", || gr.redrawsegws());
    bind!(api, gr, "gr.setsegtran", 8, |a| {
        gr.setsegtran(
            a.int(0)?,
            a.float(1)?,
            a.float(2)?,
            a.float(3)?,
            a.float(4)?,
            a.float(5)?,
            a.float(6)?,
            a.float(7)?,
        )
    });
    bind!(api, gr, "gr.closeseg", || gr.closeseg());

    bind!(api, gr, "gr.beginprint", 1, |a| gr.beginprint(a.string(0)?)?);
    bind!(api, gr, "gr.beginprintext", 4, |a| {
        gr.beginprintext(a.string(0)?, a.string(1)?, a.string(2)?, a.string(3)?)?
    });
    bind!(api, gr, "gr.endprint", || gr.endprint());
    bind!(api, gr, "gr.begingraphics", 1, |a| gr.begingraphics(a.string(0)?)?);
    bind!(api, gr, "gr.endgraphics", || gr.endgraphics());

    bind!(api, gr, "gr.beginselection", 2, |a| gr.beginselection(a.int(0)?, a.int(1)?));
    bind!(api, gr, "gr.endselection", || gr.endselection());
    bind!(api, gr, "gr.moveselection", 2, |a| gr.moveselection(a.float(0)?, a.float(1)?));
    bind!(api, gr, "gr.resizeselection", 3, |a| {
        gr.resizeselection(a.int(0)?, a.float(1)?, a.float(2)?)
    });
}
